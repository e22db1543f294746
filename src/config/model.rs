//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for ccux.
///
/// This struct represents the contents of `ccux.yaml`. Unknown fields in the
/// YAML are ignored so older binaries can read newer files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Generation defaults
    // =========================================================================
    /// Default output framework for `gen`.
    #[serde(default)]
    pub framework: Framework,

    /// Default theme for `gen` (one of the built-in theme names).
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Sections requested from the generator in fast mode.
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,

    /// Base name for project directories (`output`, `output1`, ...).
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    // =========================================================================
    // Generator process
    // =========================================================================
    /// Command used to invoke the LLM CLI. Split with shell rules, so it may
    /// carry extra arguments. `--print <prompt>` is appended.
    #[serde(default = "default_claude_cmd")]
    pub claude_cmd: String,

    /// Wall-clock limit for a single generator call.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum implementation attempts before giving up on invalid HTML.
    #[serde(default = "default_max_implementation_attempts")]
    pub max_implementation_attempts: u32,

    /// Descriptions longer than this many words are summarized first.
    #[serde(default = "default_summarize_threshold_words")]
    pub summarize_threshold_words: usize,

    // =========================================================================
    // Usage tracking
    // =========================================================================
    /// Whether to sample token usage before and after each call.
    #[serde(default = "default_true")]
    pub track_usage: bool,

    /// Command that prints usage JSON (`{"daily": [...]}`).
    #[serde(default = "default_usage_cmd")]
    pub usage_cmd: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            framework: Framework::default(),
            theme: default_theme(),
            sections: default_sections(),
            output_dir: default_output_dir(),
            claude_cmd: default_claude_cmd(),
            timeout_seconds: default_timeout_seconds(),
            max_implementation_attempts: default_max_implementation_attempts(),
            summarize_threshold_words: default_summarize_threshold_words(),
            track_usage: default_true(),
            usage_cmd: default_usage_cmd(),
        }
    }
}
