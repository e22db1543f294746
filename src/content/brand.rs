//! Brand name guessing from a product description.

use regex::Regex;
use std::sync::LazyLock;

static BRAND_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^([A-Z][A-Za-z0-9\s]{1,30})\s*[-–—]\s*",
        r"^([A-Z][A-Za-z0-9\s]{1,30})\s*\([^)]+\)",
        r"^([A-Z][A-Za-z0-9\s]{1,30})\s+is\s+",
        r"^([A-Z][A-Za-z0-9\s]{1,30})\s*:\s*",
        r"^([A-Z][A-Za-z0-9\s]{1,30})\s*,\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid brand regex"))
    .collect()
});

/// Guess a brand name from the start of a product description.
///
/// Tries "Name - ...", "Name (...)", "Name is ...", "Name: ..." and
/// "Name, ..." in that order, then the first run of up to three capitalized
/// words among the first fifteen words, then the first eight words.
pub fn extract_brand_name(description: &str) -> String {
    let description = description.trim();

    for pattern in BRAND_PATTERNS.iter() {
        if let Some(m) = pattern.captures(description).and_then(|c| c.get(1)) {
            let name = m.as_str().trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }

    let words: Vec<&str> = description.split_whitespace().collect();

    let mut run: Vec<&str> = Vec::new();
    for word in words.iter().take(15) {
        let cleaned = word.trim_matches(|c: char| !c.is_alphanumeric());
        if cleaned.chars().next().is_some_and(|c| c.is_uppercase()) {
            run.push(cleaned);
            if run.len() == 3 {
                break;
            }
        } else if !run.is_empty() {
            break;
        }
    }
    if !run.is_empty() {
        return run.join(" ");
    }

    if words.len() > 8 {
        format!("{}...", words[..8].join(" "))
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_separated_name() {
        assert_eq!(extract_brand_name("Acme Cloud - hosting for teams"), "Acme Cloud");
        assert_eq!(extract_brand_name("Nimbus — weather for pilots"), "Nimbus");
    }

    #[test]
    fn parenthesized_and_is_forms() {
        assert_eq!(extract_brand_name("Lumen (beta) lights your docs"), "Lumen");
        assert_eq!(extract_brand_name("TaskPilot is a planner for freelancers"), "TaskPilot");
    }

    #[test]
    fn colon_and_comma_forms() {
        assert_eq!(extract_brand_name("Quill: write better emails"), "Quill");
        assert_eq!(extract_brand_name("Orbit, the CRM for agencies"), "Orbit");
    }

    #[test]
    fn capitalized_run_fallback() {
        assert_eq!(
            extract_brand_name("an app called Green Leaf Tracker Pro for gardeners"),
            "Green Leaf Tracker"
        );
    }

    #[test]
    fn first_words_fallback() {
        assert_eq!(
            extract_brand_name("a tool that helps small teams plan their weekly sprints quickly"),
            "a tool that helps small teams plan their..."
        );
        assert_eq!(extract_brand_name("simple notes app"), "simple notes app");
    }
}
