//! Themes: built-in specifications, prompt rule blocks, and detection.

mod detect;
mod rules;
mod specs;

pub use detect::detect_theme;
pub use rules::utility_rules;
pub use specs::{THEMES, ThemeCategory, ThemeSpec, design_system_rules, get};

/// All theme keys in table order.
pub fn names() -> Vec<&'static str> {
    THEMES.iter().map(|t| t.key).collect()
}

/// Whether `name` is a built-in theme key.
pub fn is_valid(name: &str) -> bool {
    get(name).is_some()
}

/// One-line description for CLI help, or "Unknown theme".
pub fn description(name: &str) -> &'static str {
    get(name).map(|t| t.description).unwrap_or("Unknown theme")
}
