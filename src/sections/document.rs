//! Section document: a page parsed into text and named regions.

use super::fallback::{self, MatchKind};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--\s*(START|END):\s*(\w+)\s*-->").expect("Invalid section marker regex")
});

/// A named region delimited by `<!-- START: name -->` / `<!-- END: name -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Lowercased name.
    pub name: String,
    /// Opening marker exactly as it appears in the source.
    pub start_marker: String,
    /// Everything between the markers, verbatim.
    pub body: String,
    /// Closing marker exactly as it appears in the source.
    pub end_marker: String,
}

impl Region {
    /// A region with canonical markers.
    pub fn new(name: &str, body: &str) -> Self {
        let name = name.to_lowercase();
        Self {
            start_marker: format!("<!-- START: {} -->", name),
            end_marker: format!("<!-- END: {} -->", name),
            body: body.to_string(),
            name,
        }
    }

    /// Markers plus body.
    pub fn block(&self) -> String {
        format!("{}{}{}", self.start_marker, self.body, self.end_marker)
    }
}

/// One piece of a parsed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Region(Region),
}

/// Where an appended region was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// After the last `</script>` inside the body.
    AfterScript,
    /// Directly before `</body>`.
    BeforeBodyClose,
    /// At the end of the text (no `</body>`).
    End,
}

/// Result of [`SectionDocument::replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// An existing section was found with the given pattern and replaced.
    Replaced(MatchKind),
    /// No existing section matched; the block was inserted.
    Appended(Placement),
}

/// A page as an ordered list of text and region segments.
///
/// Rendering a freshly parsed document reproduces the input byte for byte.
/// A START marker without a matching END stays part of the surrounding text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionDocument {
    segments: Vec<Segment>,
}

struct Marker {
    is_start: bool,
    name: String,
    start: usize,
    end: usize,
}

impl SectionDocument {
    /// Parse `html` in a single pass over its section markers.
    pub fn parse(html: &str) -> Self {
        let markers: Vec<Marker> = MARKER_REGEX
            .captures_iter(html)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(Marker {
                    is_start: caps[1].eq_ignore_ascii_case("START"),
                    name: caps[2].to_lowercase(),
                    start: whole.start(),
                    end: whole.end(),
                })
            })
            .collect();

        let mut segments = Vec::new();
        let mut cursor = 0;
        let mut i = 0;

        while i < markers.len() {
            let open = &markers[i];
            if open.start < cursor || !open.is_start {
                i += 1;
                continue;
            }

            let close = markers[i + 1..]
                .iter()
                .position(|m| !m.is_start && m.name == open.name)
                .map(|offset| i + 1 + offset);

            let Some(j) = close else {
                i += 1;
                continue;
            };
            let close = &markers[j];

            if open.start > cursor {
                segments.push(Segment::Text(html[cursor..open.start].to_string()));
            }
            segments.push(Segment::Region(Region {
                name: open.name.clone(),
                start_marker: html[open.start..open.end].to_string(),
                body: html[open.end..close.start].to_string(),
                end_marker: html[close.start..close.end].to_string(),
            }));
            cursor = close.end;
            i = j + 1;
        }

        if cursor < html.len() {
            segments.push(Segment::Text(html[cursor..].to_string()));
        }

        Self { segments }
    }

    /// Concatenate all segments back into text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Region(region) => {
                    out.push_str(&region.start_marker);
                    out.push_str(&region.body);
                    out.push_str(&region.end_marker);
                }
            }
        }
        out
    }

    /// All regions in document order, duplicates included.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Region(r) => Some(r),
            Segment::Text(_) => None,
        })
    }

    /// Distinct region names in order of first appearance.
    pub fn names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.regions()
            .filter(|r| seen.insert(r.name.clone()))
            .map(|r| r.name.clone())
            .collect()
    }

    /// First region with this name (case-insensitive).
    pub fn region(&self, name: &str) -> Option<&Region> {
        let name = name.to_lowercase();
        self.regions().find(|r| r.name == name)
    }

    /// Body of the first region with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.region(name).map(|r| r.body.as_str())
    }

    /// Replace the section `name` with `body`, wrapped in canonical markers.
    ///
    /// Existing content is located by the first fallback pattern that matches
    /// (see [`MatchKind`]); every match of that pattern is replaced. When
    /// nothing matches, the block is inserted after the last `</script>`
    /// inside the body, else before `</body>`, else at the end. Call
    /// [`dedupe`](Self::dedupe) afterwards to collapse repeated regions.
    pub fn replace(&mut self, name: &str, body: &str) -> ReplaceOutcome {
        let region = Region::new(name, body);

        let mut replaced_any = false;
        for segment in self.segments.iter_mut() {
            if let Segment::Region(existing) = segment
                && existing.name == region.name
            {
                *existing = region.clone();
                replaced_any = true;
            }
        }
        if replaced_any {
            return ReplaceOutcome::Replaced(MatchKind::MarkerPair);
        }

        let html = self.render();
        let block = region.block();

        for kind in MatchKind::text_fallbacks(&region.name) {
            let ranges = fallback::find_all(*kind, &html, &region.name);
            if ranges.is_empty() {
                continue;
            }
            tracing::debug!(section = %region.name, ?kind, matches = ranges.len(), "replacing via fallback pattern");

            let mut updated = html.clone();
            for range in ranges.into_iter().rev() {
                updated.replace_range(range, &block);
            }
            *self = Self::parse(&updated);
            return ReplaceOutcome::Replaced(*kind);
        }

        let (updated, placement) = insert_block(&html, &block);
        tracing::debug!(section = %region.name, ?placement, "section not found, appended");
        *self = Self::parse(&updated);
        ReplaceOutcome::Appended(placement)
    }

    /// Keep only the first region of each of `names`; returns how many were removed.
    pub fn dedupe_names(&mut self, names: &[String]) -> usize {
        let targets: HashSet<String> = names.iter().map(|n| n.to_lowercase()).collect();
        self.dedupe_where(|name| targets.contains(name))
    }

    /// Keep only the first region of every name; returns how many were removed.
    pub fn dedupe(&mut self) -> usize {
        self.dedupe_where(|_| true)
    }

    fn dedupe_where<F: Fn(&str) -> bool>(&mut self, applies: F) -> usize {
        let mut seen = HashSet::new();
        let before = self.segments.len();
        self.segments.retain(|segment| match segment {
            Segment::Region(r) if applies(&r.name) => seen.insert(r.name.clone()),
            _ => true,
        });
        before - self.segments.len()
    }
}

fn insert_block(html: &str, block: &str) -> (String, Placement) {
    let lower = html.to_ascii_lowercase();

    let Some(body_end) = lower.rfind("</body>") else {
        return (format!("{}\n{}", html, block), Placement::End);
    };

    let body_open = lower.find("<body").unwrap_or(0);
    if let Some(script_end) = lower.rfind("</script>")
        && script_end > body_open
        && script_end < body_end
    {
        let at = script_end + "</script>".len();
        let updated = format!("{}\n{}\n{}", &html[..at], block, &html[at..]);
        return (updated, Placement::AfterScript);
    }

    let updated = format!("{}{}\n{}", &html[..body_end], block, &html[body_end..]);
    (updated, Placement::BeforeBodyClose)
}

/// Name to full block (markers included) for the first region of each name.
pub fn extract_sections(html: &str) -> BTreeMap<String, String> {
    let doc = SectionDocument::parse(html);
    let mut map = BTreeMap::new();
    for region in doc.regions() {
        map.entry(region.name.clone())
            .or_insert_with(|| region.block());
    }
    map
}

/// Name to body for the first region of each name.
pub fn extract_section_bodies(html: &str) -> BTreeMap<String, String> {
    let doc = SectionDocument::parse(html);
    let mut map = BTreeMap::new();
    for region in doc.regions() {
        map.entry(region.name.clone())
            .or_insert_with(|| region.body.clone());
    }
    map
}

/// Apply new section bodies to a page, then dedupe the touched names.
pub fn replace_sections(
    html: &str,
    bodies: &BTreeMap<String, String>,
    order: &[String],
) -> (String, Vec<(String, ReplaceOutcome)>) {
    let mut doc = SectionDocument::parse(html);
    let mut outcomes = Vec::new();
    let mut touched = Vec::new();

    for name in order {
        let key = name.to_lowercase();
        let Some(body) = bodies.get(&key) else {
            continue;
        };
        let outcome = doc.replace(&key, body);
        outcomes.push((key.clone(), outcome));
        touched.push(key);
    }

    let removed = doc.dedupe_names(&touched);
    if removed > 0 {
        tracing::info!(removed, "removed duplicate sections");
    }

    (doc.render(), outcomes)
}

/// Merge every marked region found in `edited` back into `html`.
pub fn merge_sections(html: &str, edited: &str) -> (String, Vec<(String, ReplaceOutcome)>) {
    let mut edited = SectionDocument::parse(edited);
    edited.dedupe();
    let bodies: BTreeMap<String, String> = edited
        .regions()
        .map(|r| (r.name.clone(), r.body.clone()))
        .collect();
    replace_sections(html, &bodies, &edited.names())
}
