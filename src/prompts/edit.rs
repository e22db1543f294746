//! Prompts that rewrite part or all of an existing page.

use super::format_context;
use super::requirements::{HTML_ONLY, SECTIONS_ONLY};
use crate::config::Framework;
use crate::content::truncate_chars;
use crate::theme;
use std::collections::BTreeMap;

const DESCRIPTION_LIMIT: usize = 200;

const PRESERVE_FUNCTIONALITY: &str = "PRESERVE FUNCTIONALITY:\n\
- Navigation links (href=\"#section\") and smooth scrolling keep working\n\
- Mobile menu toggle keeps onclick=\"toggleMobileMenu()\" and its script\n\
- Section ids stay the same (id=\"hero\", id=\"features\", ...)\n\
- Responsive breakpoints sm: md: lg: stay in place\n\
- Form actions, CTA links, hover and focus states keep working\n\
- Animation keyframes, data-animate attributes, IntersectionObserver setup and\n\
  prefers-reduced-motion rules stay intact";

fn product_line(description: &str) -> String {
    truncate_chars(description, DESCRIPTION_LIMIT)
}

/// Regenerate the named sections so they match the rest of the page.
pub fn regeneration_prompt(
    description: &str,
    framework: Framework,
    theme_name: &str,
    sections: &[String],
    context: &BTreeMap<String, String>,
) -> String {
    let wanted = sections
        .iter()
        .map(|s| format!("- {}", s))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Regenerate sections of an existing landing page.\n\n\
         Product: {product}\n\
         Sections to update: {listed}\n\
         Framework: {framework}\n\
         Theme: {theme_name}\n\n\
         Existing context:\n{context}\n\n\
         {rules}\n\n\
         Wrap each section in its markers:\n\
         <!-- START: section_name -->\n<section id=\"section_name\">...</section>\n<!-- END: section_name -->\n\n\
         Sections to generate:\n{wanted}\n\n\
         REGENERATION RULES:\n\
         1. Keep the {theme_name} styling of the existing sections exactly\n\
         2. Reuse the same classes and color scheme; only content may change\n\
         3. Reference images with relative paths (../filename.jpg)\n\n\
         {preserve}\n\n\
         {output}",
        product = product_line(description),
        listed = sections.join(", "),
        context = format_context(context),
        rules = theme::utility_rules(theme_name),
        preserve = PRESERVE_FUNCTIONALITY,
        output = SECTIONS_ONLY,
    )
}

fn editing_rules(theme_name: &str) -> String {
    format!(
        "EDITING RULES:\n\
         1. Change only what the instruction asks for\n\
         2. Keep the {theme_name} theme styling, layout and visual hierarchy\n\
         3. Keep section markers (<!-- START: name --> / <!-- END: name -->) around every section\n\
         4. New content matches the existing design patterns\n\
         5. Text, images (relative paths ../filename.jpg) and content inside sections may change"
    )
}

/// Apply a free-form instruction to a whole page.
pub fn editgen_prompt(
    description: &str,
    framework: Framework,
    theme_name: &str,
    instruction: &str,
    context: &BTreeMap<String, String>,
    affected: &[String],
    page: &str,
) -> String {
    let focus = if affected.is_empty() {
        String::new()
    } else {
        format!("Focus changes on these sections: {}\n\n", affected.join(", "))
    };

    format!(
        "Edit an existing landing page.\n\n\
         Product: {product}\n\
         Framework: {framework}\n\
         Theme: {theme_name}\n\n\
         Edit request: {instruction}\n\n\
         Existing context:\n{context}\n\n\
         {focus}\
         {rules}\n\n\
         {editing}\n\n\
         {preserve}\n\n\
         CURRENT PAGE:\n{page}\n\n\
         {output}",
        product = product_line(description),
        context = format_context(context),
        rules = theme::utility_rules(theme_name),
        editing = editing_rules(theme_name),
        preserve = PRESERVE_FUNCTIONALITY,
        output = HTML_ONLY,
    )
}

/// Apply an instruction to a few marked regions only.
///
/// `sections_html` holds the current regions, markers included.
pub fn editgen_sections_prompt(
    description: &str,
    framework: Framework,
    theme_name: &str,
    instruction: &str,
    sections: &[String],
    sections_html: &str,
) -> String {
    format!(
        "Edit selected sections of an existing landing page.\n\n\
         Product: {product}\n\
         Framework: {framework}\n\
         Theme: {theme_name}\n\
         Sections: {listed}\n\n\
         Edit request: {instruction}\n\n\
         {rules}\n\n\
         {editing}\n\n\
         CURRENT SECTIONS:\n{sections_html}\n\n\
         Return every section listed above, edited or not, with the same marker names.\n\n\
         {output}",
        product = product_line(description),
        listed = sections.join(", "),
        rules = theme::utility_rules(theme_name),
        editing = editing_rules(theme_name),
        output = SECTIONS_ONLY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn regeneration_lists_sections_and_context() {
        let mut context = BTreeMap::new();
        context.insert("framework".to_string(), "html".to_string());
        let prompt = regeneration_prompt(
            "Todo app",
            Framework::Html,
            "brutalist",
            &names(&["hero", "pricing"]),
            &context,
        );
        assert!(prompt.contains("Sections to update: hero, pricing"));
        assert!(prompt.contains("- hero\n- pricing"));
        assert!(prompt.contains("- framework: html"));
        assert!(prompt.contains("bg-yellow-400"));
        assert!(prompt.contains("No full document"));
    }

    #[test]
    fn regeneration_truncates_long_descriptions() {
        let long = "x".repeat(500);
        let prompt = regeneration_prompt(&long, Framework::Html, "minimal", &[], &BTreeMap::new());
        assert!(!prompt.contains(&"x".repeat(201)));
        assert!(prompt.contains("No specific context provided"));
    }

    #[test]
    fn editgen_includes_page_and_focus() {
        let prompt = editgen_prompt(
            "Todo app",
            Framework::Html,
            "minimal",
            "make the hero punchier",
            &BTreeMap::new(),
            &names(&["hero"]),
            "<html>PAGE</html>",
        );
        assert!(prompt.contains("Edit request: make the hero punchier"));
        assert!(prompt.contains("Focus changes on these sections: hero"));
        assert!(prompt.contains("<html>PAGE</html>"));
        assert!(prompt.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn editgen_without_affected_sections_has_no_focus_line() {
        let prompt = editgen_prompt(
            "Todo app",
            Framework::Html,
            "minimal",
            "fix typos",
            &BTreeMap::new(),
            &[],
            "<html></html>",
        );
        assert!(!prompt.contains("Focus changes"));
    }

    #[test]
    fn editgen_sections_asks_for_marked_blocks() {
        let prompt = editgen_sections_prompt(
            "Todo app",
            Framework::Html,
            "dark",
            "shorter copy",
            &names(&["hero", "footer"]),
            "<!-- START: hero -->\n<h1>Hi</h1>\n<!-- END: hero -->",
        );
        assert!(prompt.contains("Sections: hero, footer"));
        assert!(prompt.contains("<h1>Hi</h1>"));
        assert!(prompt.contains("same marker names"));
    }
}
