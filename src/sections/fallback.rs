//! Fallback patterns for locating a section that has no START/END markers.
//!
//! Precedence is the order of [`MatchKind`]: the first pattern with any
//! match wins, even if a later pattern would have matched more precisely.
//! The heuristics can hit unintended markup on irregular pages; that
//! behavior is kept as is.

use regex::Regex;
use std::ops::Range;

/// Which pattern located the replaced section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// `<!-- START: name -->` ... `<!-- END: name -->`
    MarkerPair,
    /// `<!-- SECTION: name -->` ... `<!-- END SECTION: name -->`
    LegacyMarkerPair,
    /// `<!-- Name Section -->` up to the next section comment, `</body>`, or the end.
    HeadingComment,
    /// `<section class="...name...">` ... `</section>`
    SectionClass,
    /// `<nav class="...fixed...">` ... `</nav>` (header and nav sections only)
    FixedNav,
    /// Any `<nav>` ... `</nav>` (header and nav sections only)
    NavTag,
    /// Any `<header>` ... `</header>` (header and nav sections only)
    HeaderTag,
}

const BASE: &[MatchKind] = &[
    MatchKind::LegacyMarkerPair,
    MatchKind::HeadingComment,
    MatchKind::SectionClass,
];

const WITH_NAVIGATION: &[MatchKind] = &[
    MatchKind::LegacyMarkerPair,
    MatchKind::HeadingComment,
    MatchKind::SectionClass,
    MatchKind::FixedNav,
    MatchKind::NavTag,
    MatchKind::HeaderTag,
];

impl MatchKind {
    /// Text patterns tried, in order, once no marker pair exists for `name`.
    pub fn text_fallbacks(name: &str) -> &'static [MatchKind] {
        match name {
            "header" | "nav" | "navigation" => WITH_NAVIGATION,
            _ => BASE,
        }
    }
}

/// Non-overlapping byte ranges matched by `kind` for section `name`.
pub fn find_all(kind: MatchKind, html: &str, name: &str) -> Vec<Range<usize>> {
    let escaped = regex::escape(name);
    let pattern = match kind {
        MatchKind::MarkerPair => format!(
            r"(?is)<!--\s*START:\s*{0}\s*-->.*?<!--\s*END:\s*{0}\s*-->",
            escaped
        ),
        MatchKind::LegacyMarkerPair => format!(
            r"(?is)<!--\s*SECTION:\s*{0}\s*-->.*?<!--\s*END SECTION:\s*{0}\s*-->",
            escaped
        ),
        MatchKind::HeadingComment => return heading_comment_ranges(html, name),
        MatchKind::SectionClass => format!(
            r#"(?is)<section[^>]*class="[^"]*{}[^"]*"[^>]*>.*?</section>"#,
            escaped
        ),
        MatchKind::FixedNav => r#"(?is)<nav[^>]*class="[^"]*fixed[^"]*"[^>]*>.*?</nav>"#.to_string(),
        MatchKind::NavTag => r"(?is)<nav[^>]*>.*?</nav>".to_string(),
        MatchKind::HeaderTag => r"(?is)<header[^>]*>.*?</header>".to_string(),
    };

    match Regex::new(&pattern) {
        Ok(regex) => regex.find_iter(html).map(|m| m.range()).collect(),
        Err(e) => {
            tracing::warn!(?kind, error = %e, "skipping unusable section pattern");
            Vec::new()
        }
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn heading_comment_ranges(html: &str, name: &str) -> Vec<Range<usize>> {
    let pattern = format!(r"(?i)<!-- {} Section -->", regex::escape(&title_case(name)));
    let Ok(open) = Regex::new(&pattern) else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos <= html.len() {
        let Some(m) = open.find_at(html, pos) else {
            break;
        };
        let end = heading_end(html, m.end());
        ranges.push(m.start()..end);
        pos = end.max(m.end());
        if pos >= html.len() {
            break;
        }
    }
    ranges
}

/// End of a heading-comment section starting its body at `from`: the next
/// comment that is followed by some `... Section -->` comment, `</body>`,
/// or the end of the text, whichever comes first.
fn heading_end(html: &str, from: usize) -> usize {
    let rest = html[from..].to_ascii_lowercase();

    let next_section_comment = rest.rfind(" section -->").and_then(|last| {
        rest.find("<!-- ")
            .filter(|&start| start + "<!-- ".len() <= last)
    });
    let body_close = rest.find("</body>");

    let offset = [next_section_comment, body_close]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());

    from + offset
}
