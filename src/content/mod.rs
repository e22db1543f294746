//! Processing of raw generator output.
//!
//! Everything here is a line- or regex-level heuristic over text, not a
//! parser: JSON extraction from fenced replies, fence stripping, HTML
//! validity checks, metadata extraction and brand-name guessing.

mod brand;
mod fences;
mod html;
mod json;

pub use brand::extract_brand_name;
pub use fences::strip_code_fences;
pub use html::{
    HtmlCheck, clean_html, extract_first_heading, extract_meta_description, extract_title,
    minify_html, validate_html_output, validate_html_structure,
};
pub use json::{JsonExtract, extract_json};

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `max` characters of `text`, with `...` appended when cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count("  one two\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }
}
