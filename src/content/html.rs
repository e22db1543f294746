//! HTML heuristics: output validation, metadata extraction, cleanup.

use super::fences::strip_code_fences;
use regex::Regex;
use std::sync::LazyLock;

/// Phrases that mean the generator answered with an error or a refusal.
pub const ERROR_PHRASES: [&str; 9] = [
    "execution error",
    "error occurred",
    "failed to generate",
    "request timeout",
    "connection timeout",
    "claude code failed",
    "i'm unable to",
    "i cannot",
    "sorry, i can't",
];

/// Markup that suggests the output is a page.
pub const HTML_INDICATORS: [&str; 10] = [
    "<!doctype html",
    "<html",
    "<head>",
    "<body>",
    "<div",
    "<section",
    "tailwindcss",
    "<nav",
    "<main",
    "<footer",
];

const MIN_LENGTH: usize = 50;
const MIN_INDICATORS: usize = 2;

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("Invalid title regex")
});

static META_DESCRIPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\s+[^>]*name=["']description["'][^>]*content=["']([^"']*)["']"#)
        .expect("Invalid meta description regex")
});

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("Invalid h1 regex"));

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

static BLANK_RUNS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("Invalid blank-run regex"));

static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--(.*?)-->").expect("Invalid comment regex"));

static BETWEEN_TAGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("Invalid whitespace regex"));

/// Result of [`validate_html_output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlCheck {
    pub valid: bool,
    /// Why the content was rejected; empty when valid.
    pub reason: String,
}

impl HtmlCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: String::new(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }
}

/// Decide whether generator output looks like a usable page.
pub fn validate_html_output(content: &str) -> HtmlCheck {
    let trimmed = content.trim();
    if trimmed.len() < MIN_LENGTH {
        return HtmlCheck::rejected(format!(
            "content too short ({} characters, need at least {})",
            trimmed.len(),
            MIN_LENGTH
        ));
    }

    let lower = trimmed.to_lowercase();
    if let Some(phrase) = ERROR_PHRASES.iter().find(|p| lower.contains(*p)) {
        return HtmlCheck::rejected(format!("output contains error phrase '{}'", phrase));
    }

    let mut indicators = HTML_INDICATORS
        .iter()
        .filter(|i| lower.contains(*i))
        .count();
    if lower.starts_with("<!doctype html") {
        indicators += 2;
    }

    if indicators < MIN_INDICATORS {
        return HtmlCheck::rejected(format!(
            "output does not look like HTML ({} structural markers found)",
            indicators
        ));
    }

    HtmlCheck::ok()
}

/// Report missing top-level tags.
pub fn validate_html_structure(html: &str) -> Vec<String> {
    let lower = html.to_lowercase();
    ["<html", "<head", "<body"]
        .iter()
        .filter(|tag| !lower.contains(*tag))
        .map(|tag| format!("missing {}> tag", tag))
        .collect()
}

/// Text of the `<title>` element.
pub fn extract_title(html: &str) -> Option<String> {
    capture_text(&TITLE_REGEX, html)
}

/// Content of `<meta name="description">`.
pub fn extract_meta_description(html: &str) -> Option<String> {
    capture_text(&META_DESCRIPTION_REGEX, html)
}

/// Text of the first `<h1>`, inner tags removed.
pub fn extract_first_heading(html: &str) -> Option<String> {
    let inner = H1_REGEX.captures(html)?.get(1)?.as_str();
    let text = TAG_REGEX.replace_all(inner, "");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then_some(text)
}

fn capture_text(regex: &Regex, html: &str) -> Option<String> {
    let text = regex.captures(html)?.get(1)?.as_str().trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Strip fences and collapse runs of blank lines.
pub fn clean_html(html: &str) -> String {
    let stripped = strip_code_fences(html);
    BLANK_RUNS_REGEX.replace_all(&stripped, "\n\n").into_owned()
}

/// Remove non-marker comments and whitespace between tags.
///
/// Section markers (`START:`, `END:`) survive so the page stays editable.
pub fn minify_html(html: &str) -> String {
    let without_comments = COMMENT_REGEX.replace_all(html, |caps: &regex::Captures| {
        let body = caps[1].trim_start();
        if body.starts_with("START:") || body.starts_with("END:") {
            caps[0].to_string()
        } else {
            String::new()
        }
    });
    BETWEEN_TAGS_REGEX
        .replace_all(&without_comments, "><")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title> Acme Rockets </title>
  <meta name="description" content="Rockets for everyone">
</head>
<body>
  <h1 class="text-4xl">Launch <span>faster</span></h1>
</body>
</html>"#;

    #[test]
    fn full_page_is_valid() {
        assert!(validate_html_output(PAGE).valid);
    }

    #[test]
    fn short_content_rejected() {
        let check = validate_html_output("<div>hi</div>");
        assert!(!check.valid);
        assert!(check.reason.contains("too short"));
    }

    #[test]
    fn refusal_rejected_even_with_markup() {
        let text = "<div><section>I'm unable to create this page because the request was unclear.</section></div>";
        let check = validate_html_output(text);
        assert!(!check.valid);
        assert!(check.reason.contains("i'm unable to"));
    }

    #[test]
    fn prose_without_markup_rejected() {
        let text = "Here is a description of a landing page that would work well for you and your team.";
        assert!(!validate_html_output(text).valid);
    }

    #[test]
    fn doctype_counts_double() {
        // Only the doctype marker, padded past the length floor.
        let text = format!("<!DOCTYPE html>{}", " x".repeat(40));
        assert!(validate_html_output(&text).valid);
    }

    #[test]
    fn structure_reports_missing_tags() {
        assert!(validate_html_structure(PAGE).is_empty());
        let issues = validate_html_structure("<div>fragment</div>");
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0], "missing <html> tag");
    }

    #[test]
    fn extracts_metadata() {
        assert_eq!(extract_title(PAGE).as_deref(), Some("Acme Rockets"));
        assert_eq!(
            extract_meta_description(PAGE).as_deref(),
            Some("Rockets for everyone")
        );
        assert_eq!(extract_first_heading(PAGE).as_deref(), Some("Launch faster"));
        assert_eq!(extract_title("<html></html>"), None);
    }

    #[test]
    fn clean_collapses_blank_runs() {
        let text = "```html\n<div>\n\n\n\n</div>\n```";
        assert_eq!(clean_html(text), "<div>\n\n</div>");
    }

    #[test]
    fn minify_keeps_section_markers() {
        let html = "<body>\n  <!-- START: hero -->\n  <!-- note -->\n  <p>x</p>\n  <!-- END: hero -->\n</body>";
        assert_eq!(
            minify_html(html),
            "<body><!-- START: hero --><p>x</p><!-- END: hero --></body>"
        );
    }
}
