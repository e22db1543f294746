//! Configuration types and defaults for ccux.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output framework for generated pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// A single self-contained `index.html` (default).
    #[default]
    Html,
    /// `App.jsx` plus a shell `index.html` that loads React from a CDN.
    React,
}

impl Framework {
    /// Parse a framework name (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Some(Self::Html),
            "react" => Some(Self::React),
            _ => None,
        }
    }

    /// File name the generated page is written to.
    pub fn page_file(self) -> &'static str {
        match self {
            Self::Html => "index.html",
            Self::React => "App.jsx",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::React => write!(f, "react"),
        }
    }
}

pub fn default_theme() -> String {
    "minimal".to_string()
}

pub fn default_sections() -> Vec<String> {
    ["hero", "features", "pricing", "footer"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_claude_cmd() -> String {
    "claude".to_string()
}

pub fn default_output_dir() -> String {
    "output".to_string()
}

pub fn default_timeout_seconds() -> u64 {
    300
}

pub fn default_usage_cmd() -> String {
    "ccusage --json --order desc".to_string()
}

pub fn default_max_implementation_attempts() -> u32 {
    2
}

pub fn default_summarize_threshold_words() -> usize {
    300
}

pub fn default_true() -> bool {
    true
}
