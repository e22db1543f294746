//! The per-project design analysis document (`design_analysis.json`).
//!
//! The document is an open JSON object. Commands read it, mutate a few
//! well-known keys and write it back atomically; keys this version does
//! not know about are carried through untouched. A missing or malformed
//! file reads as an empty document.

mod history;

#[cfg(test)]
mod tests;

pub use history::{
    EditEntry, FormEntry, GenerationStats, PhaseStat, ProjectMetadata, RegenerationEntry,
    ThemeEntry,
};

use crate::error::{CcuxError, Result};
use crate::fs::{atomic_write_file, read_text};
use crate::usage::UsageStats;
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const ANALYSIS_FILE: &str = "design_analysis.json";

/// History arrays that carry per-operation usage, with their display label.
pub const HISTORY_KEYS: [(&str, &str); 4] = [
    ("regeneration_history", "regen"),
    ("edit_history", "edit"),
    ("theme_history", "theme"),
    ("form_history", "form"),
];

/// Usage of one recorded operation.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    pub operation: &'static str,
    pub detail: String,
    pub timestamp: Option<String>,
    pub usage: UsageStats,
}

#[derive(Debug, Clone)]
pub struct DesignAnalysis {
    path: PathBuf,
    doc: Map<String, Value>,
}

impl DesignAnalysis {
    /// An empty document that will be saved into `dir`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: Self::path_in(dir),
            doc: Map::new(),
        }
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(ANALYSIS_FILE)
    }

    pub fn exists(dir: &Path) -> bool {
        Self::path_in(dir).is_file()
    }

    /// Load the document from `dir`; missing or malformed files give an empty one.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        if !path.exists() {
            return Ok(Self { path, doc: Map::new() });
        }
        let text = read_text(&path)?;
        Ok(Self {
            doc: parse_document(&text, &path),
            path,
        })
    }

    /// Like [`load`](Self::load) but the file must exist.
    pub fn load_existing(dir: &Path) -> Result<Self> {
        if !Self::exists(dir) {
            return Err(CcuxError::UserError(format!(
                "no {} found in '{}'\nFix: run `ccux gen` first or pass --output <project dir>.",
                ANALYSIS_FILE,
                dir.display()
            )));
        }
        Self::load(dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.doc
    }

    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    /// Write the document back, pretty-printed, via an atomic replace.
    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.doc).map_err(|e| {
            CcuxError::UserError(format!("failed to serialize {}: {}", ANALYSIS_FILE, e))
        })?;
        atomic_write_file(&self.path, &text)?;
        tracing::debug!(path = %self.path.display(), keys = self.doc.len(), "saved design analysis");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.doc.get(key)
    }

    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter().try_fold(self.doc.get(*first)?, |v, key| v.get(key))
    }

    /// Non-empty string at `path`.
    pub fn str_at(&self, path: &[&str]) -> Option<&str> {
        self.lookup(path)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Phase output stored under `key`, or `{}`.
    pub fn phase(&self, key: &str) -> Value {
        self.doc
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = to_json(key, value)?;
        self.doc.insert(key.to_string(), value);
        Ok(())
    }

    /// Set a nested key, creating (or replacing non-object) parents.
    pub fn set_path<T: Serialize>(&mut self, path: &[&str], value: T) -> Result<()> {
        let Some((last, parents)) = path.split_last() else {
            return Ok(());
        };
        let value = to_json(last, value)?;
        let mut current = &mut self.doc;
        for key in parents {
            let slot = current
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            current = match slot {
                Value::Object(map) => map,
                _ => return Ok(()),
            };
        }
        current.insert(last.to_string(), value);
        Ok(())
    }

    /// Append `entry` to the array under `key`, creating it when absent.
    pub fn push<T: Serialize>(&mut self, key: &str, entry: T) -> Result<()> {
        let entry = to_json(key, entry)?;
        let slot = self
            .doc
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match slot {
            Value::Array(items) => items.push(entry),
            other => *other = Value::Array(vec![entry]),
        }
        Ok(())
    }

    /// Set `last_updated` to now.
    pub fn touch(&mut self) {
        self.doc.insert(
            "last_updated".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
    }

    /// Description recorded for the product, most specific source first.
    pub fn product_description(&self) -> Option<String> {
        self.str_at(&["project_metadata", "product_description"])
            .or_else(|| self.str_at(&["product_understanding", "problem"]))
            .or_else(|| self.str_at(&["product_description"]))
            .map(str::to_string)
    }

    /// Current theme: `current_theme` > `theme` > `project_metadata.theme`.
    pub fn theme(&self) -> Option<String> {
        self.str_at(&["current_theme"])
            .or_else(|| self.str_at(&["theme"]))
            .or_else(|| self.str_at(&["project_metadata", "theme"]))
            .map(str::to_string)
    }

    pub fn sections(&self) -> Vec<String> {
        self.get("sections")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Append names not yet listed in `sections`.
    pub fn add_sections(&mut self, names: &[String]) {
        let mut sections = self.sections();
        for name in names {
            if !sections.contains(name) {
                sections.push(name.clone());
            }
        }
        self.doc.insert(
            "sections".to_string(),
            Value::Array(sections.into_iter().map(Value::String).collect()),
        );
    }

    /// `total_usage` of the initial generation.
    pub fn total_usage(&self) -> UsageStats {
        usage_from(self.get("total_usage"))
    }

    /// Usage of every history entry, in `HISTORY_KEYS` order.
    pub fn history_usage(&self) -> Vec<UsageRecord> {
        let mut records = Vec::new();
        for (key, operation) in HISTORY_KEYS {
            let Some(entries) = self.get(key).and_then(Value::as_array) else {
                continue;
            };
            for entry in entries {
                records.push(UsageRecord {
                    operation,
                    detail: entry_detail(operation, entry),
                    timestamp: entry
                        .get("timestamp")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    usage: usage_from(entry.get("usage_stats")),
                });
            }
        }
        records
    }

    /// Generation usage plus every history entry.
    pub fn lifetime_usage(&self) -> UsageStats {
        self.total_usage() + self.history_usage().iter().map(|r| r.usage).sum::<UsageStats>()
    }

    /// Recorded full-mode phases as `(name, duration_seconds, usage)`.
    pub fn phase_stats(&self) -> Vec<(String, f64, UsageStats)> {
        self.get("design_phases")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        (
                            item.get("name")
                                .and_then(Value::as_str)
                                .unwrap_or("phase")
                                .to_string(),
                            item.get("duration_seconds")
                                .and_then(Value::as_f64)
                                .unwrap_or(0.0),
                            usage_from(item.get("usage")),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn parse_document(text: &str, path: &Path) -> Map<String, Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::warn!(path = %path.display(), "design analysis is not a JSON object, starting empty");
            Map::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed design analysis, starting empty");
            Map::new()
        }
    }
}

fn to_json<T: Serialize>(key: &str, value: T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| CcuxError::UserError(format!("failed to record '{}': {}", key, e)))
}

fn usage_from(value: Option<&Value>) -> UsageStats {
    value
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

fn entry_detail(operation: &str, entry: &Value) -> String {
    let text = |key: &str| entry.get(key).and_then(Value::as_str).unwrap_or("").to_string();
    let list = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    };
    match operation {
        "regen" => format!("sections: {}", list("sections_updated")),
        "edit" => crate::content::truncate_chars(&text("instruction"), 50),
        "theme" => format!("{} -> {}", text("from_theme"), text("to_theme")),
        _ => format!("form {}", text("operation")),
    }
}
