//! Section naming, ordering and structure diagnostics.

use super::document::SectionDocument;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Conventional top-to-bottom order of landing page sections.
pub const SECTION_ORDER: [&str; 12] = [
    "header",
    "nav",
    "hero",
    "features",
    "benefits",
    "testimonials",
    "pricing",
    "cta",
    "about",
    "faq",
    "contact",
    "footer",
];

/// Regenerated by `regen --all` when a page has no marked sections.
pub const DEFAULT_REGEN_SECTIONS: [&str; 5] = ["header", "hero", "features", "pricing", "footer"];

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("Invalid section name regex"));

static RAW_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--\s*(START|END):\s*(\w+)\s*-->").expect("Invalid section marker regex")
});

static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h[1-6][^>]*>(.*?)</h[1-6]>").expect("Invalid heading regex")
});

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

/// Whether `name` can be used inside a section marker.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Warnings for names that cannot be used as markers or are not conventional.
pub fn validate_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| {
            if !is_valid_name(name) {
                Some(format!(
                    "Section name '{}' is invalid; use letters, digits and underscores",
                    name
                ))
            } else if !SECTION_ORDER.contains(&name.to_lowercase().as_str()) {
                Some(format!("Section '{}' is not a standard section", name))
            } else {
                None
            }
        })
        .collect()
}

/// Sort known section names by [`SECTION_ORDER`]; unknown names follow in input order.
pub fn order_semantically(names: &[String]) -> Vec<String> {
    let mut ordered: Vec<String> = SECTION_ORDER
        .iter()
        .filter_map(|standard| {
            names
                .iter()
                .find(|n| n.to_lowercase() == *standard)
                .cloned()
        })
        .collect();

    for name in names {
        if !ordered.contains(name) {
            ordered.push(name.clone());
        }
    }
    ordered
}

/// Sections that usually need regenerating together with `name`.
pub fn dependencies(name: &str) -> &'static [&'static str] {
    match name.to_lowercase().as_str() {
        "hero" | "pricing" | "testimonials" => &["cta"],
        "features" => &["benefits"],
        _ => &[],
    }
}

/// Dependencies of `name` that exist in `available`.
pub fn related_sections(name: &str, available: &[String]) -> Vec<String> {
    dependencies(name)
        .iter()
        .filter(|dep| available.iter().any(|a| a.eq_ignore_ascii_case(dep)))
        .map(|dep| dep.to_string())
        .collect()
}

/// Split requested names into (present, missing) against `available`.
///
/// Present names are lowercased.
pub fn partition_names(requested: &[String], available: &[String]) -> (Vec<String>, Vec<String>) {
    let mut present = Vec::new();
    let mut missing = Vec::new();
    for name in requested {
        if available.iter().any(|a| a.eq_ignore_ascii_case(name)) {
            present.push(name.to_lowercase());
        } else {
            missing.push(name.clone());
        }
    }
    (present, missing)
}

/// Structural problems with section markers. Nothing is repaired.
pub fn diagnose(html: &str) -> Vec<String> {
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for caps in RAW_MARKER_REGEX.captures_iter(html) {
        let name = caps[2].to_lowercase();
        if caps[1].eq_ignore_ascii_case("START") {
            starts.push(name);
        } else {
            ends.push(name);
        }
    }

    let mut issues = Vec::new();
    for start in &starts {
        if !ends.contains(start) {
            issues.push(format!("Missing END marker for section: {}", start));
        }
    }
    for end in &ends {
        if !starts.contains(end) {
            issues.push(format!("Missing START marker for section: {}", end));
        }
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for start in &starts {
        *counts.entry(start.as_str()).or_default() += 1;
    }
    for (name, count) in counts {
        if count > 1 {
            issues.push(format!(
                "Duplicate section markers found: {} ({} times)",
                name, count
            ));
        }
    }

    issues
}

/// Content summary for one section body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionMetadata {
    pub length: usize,
    pub has_forms: bool,
    pub has_images: bool,
    pub has_links: bool,
    pub headings: Vec<String>,
}

/// Summarize a section body.
pub fn region_metadata(body: &str) -> RegionMetadata {
    let lower = body.to_lowercase();
    RegionMetadata {
        length: body.len(),
        has_forms: lower.contains("<form"),
        has_images: lower.contains("<img"),
        has_links: lower.contains("<a"),
        headings: HEADING_REGEX
            .captures_iter(body)
            .map(|c| TAG_REGEX.replace_all(&c[1], "").trim().to_string())
            .collect(),
    }
}

/// Ordered section names with metadata, for display.
pub fn summarize(html: &str) -> Vec<(String, RegionMetadata)> {
    let doc = SectionDocument::parse(html);
    order_semantically(&doc.names())
        .into_iter()
        .filter_map(|name| {
            let meta = region_metadata(doc.get(&name)?);
            Some((name, meta))
        })
        .collect()
}
