//! Config loading, environment overrides, and validation.

use super::model::Config;
use super::types::Framework;
use crate::error::{CcuxError, Result};
use crate::theme;
use crate::ui;
use std::path::Path;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "ccux.yaml";

/// Environment variable overriding `claude_cmd`.
pub const ENV_CLAUDE_CMD: &str = "CCUX_CLAUDE_CMD";
/// Environment variable overriding `theme`.
pub const ENV_DEFAULT_THEME: &str = "CCUX_DEFAULT_THEME";
/// Environment variable overriding `output_dir`.
pub const ENV_OUTPUT_DIR: &str = "CCUX_OUTPUT_DIR";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields are ignored. Environment overrides are not applied here.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CcuxError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CcuxError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CcuxError::UserError(format!("failed to serialize config: {}", e)))
    }

    /// Resolve the effective configuration.
    ///
    /// Reads `path` (or `ccux.yaml` in the current directory when it exists),
    /// falls back to defaults with a warning when the file cannot be loaded,
    /// then applies environment overrides.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let candidate = path.unwrap_or(Path::new(CONFIG_FILE));

        let mut config = if candidate.exists() {
            match Self::load(candidate) {
                Ok(config) => {
                    tracing::debug!(path = %candidate.display(), "loaded config");
                    config
                }
                Err(e) => {
                    ui::warn(&format!("{}; using defaults", e));
                    Self::default()
                }
            }
        } else {
            if path.is_some() {
                ui::warn(&format!(
                    "config file '{}' not found; using defaults",
                    candidate.display()
                ));
            }
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply `CCUX_*` overrides using the given variable lookup.
    ///
    /// Empty values are ignored. An unknown theme in `CCUX_DEFAULT_THEME` is
    /// reported and skipped.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(cmd) = non_empty(ENV_CLAUDE_CMD) {
            self.claude_cmd = cmd;
        }
        if let Some(theme_name) = non_empty(ENV_DEFAULT_THEME) {
            if theme::is_valid(&theme_name) {
                self.theme = theme_name;
            } else {
                ui::warn(&format!(
                    "{} names unknown theme '{}'; keeping '{}'",
                    ENV_DEFAULT_THEME, theme_name, self.theme
                ));
            }
        }
        if let Some(dir) = non_empty(ENV_OUTPUT_DIR) {
            self.output_dir = dir;
        }
    }

    /// Validate config values.
    ///
    /// Rules:
    /// - `theme` must be a built-in theme
    /// - `claude_cmd` must be non-empty and parse with shell quoting rules
    /// - `timeout_seconds` and `max_implementation_attempts` must be positive
    pub fn validate(&self) -> Result<()> {
        if !theme::is_valid(&self.theme) {
            return Err(CcuxError::UserError(format!(
                "config validation failed: unknown theme '{}'. Available: {}",
                self.theme,
                theme::names().join(", ")
            )));
        }

        match shell_words::split(&self.claude_cmd) {
            Ok(parts) if !parts.is_empty() => {}
            Ok(_) => {
                return Err(CcuxError::UserError(
                    "config validation failed: claude_cmd must not be empty".to_string(),
                ));
            }
            Err(e) => {
                return Err(CcuxError::UserError(format!(
                    "config validation failed: claude_cmd '{}' could not be parsed: {}",
                    self.claude_cmd, e
                )));
            }
        }

        if self.timeout_seconds == 0 {
            return Err(CcuxError::UserError(
                "config validation failed: timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.max_implementation_attempts == 0 {
            return Err(CcuxError::UserError(
                "config validation failed: max_implementation_attempts must be greater than 0"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve a framework argument, falling back to the configured default.
    pub fn resolve_framework(&self, arg: Option<&str>) -> Result<Framework> {
        match arg {
            None => Ok(self.framework),
            Some(name) => Framework::from_str(name).ok_or_else(|| {
                CcuxError::UserError(format!(
                    "unknown framework '{}'. Use 'html' or 'react'.",
                    name
                ))
            }),
        }
    }

    /// Resolve a theme argument, falling back to the configured default.
    pub fn resolve_theme(&self, arg: Option<&str>) -> Result<String> {
        let name = arg.unwrap_or(&self.theme).trim().to_ascii_lowercase();
        if theme::is_valid(&name) {
            Ok(name)
        } else {
            Err(CcuxError::UserError(format!(
                "unknown theme '{}'. Available: {}",
                name,
                theme::names().join(", ")
            )))
        }
    }
}
