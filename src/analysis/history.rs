//! Typed records stored inside the design analysis document.

use crate::usage::UsageStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One `regeneration_history` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenerationEntry {
    pub timestamp: DateTime<Utc>,
    pub sections_updated: Vec<String>,
    pub product_description: String,
    pub usage_stats: UsageStats,
    pub method: String,
}

impl RegenerationEntry {
    pub fn new(sections: Vec<String>, description: &str, usage: UsageStats) -> Self {
        Self {
            timestamp: Utc::now(),
            sections_updated: sections,
            product_description: description.to_string(),
            usage_stats: usage,
            method: "regen_command".to_string(),
        }
    }
}

/// One `edit_history` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditEntry {
    pub timestamp: DateTime<Utc>,
    pub instruction: String,
    pub affected_sections: Vec<String>,
    pub usage_stats: UsageStats,
}

impl EditEntry {
    pub fn new(instruction: &str, affected: Vec<String>, usage: UsageStats) -> Self {
        Self {
            timestamp: Utc::now(),
            instruction: instruction.to_string(),
            affected_sections: affected,
            usage_stats: usage,
        }
    }
}

/// One `theme_history` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub timestamp: DateTime<Utc>,
    pub from_theme: String,
    pub to_theme: String,
    pub usage_stats: UsageStats,
    pub method: String,
}

impl ThemeEntry {
    pub fn new(from: &str, to: &str, usage: UsageStats) -> Self {
        Self {
            timestamp: Utc::now(),
            from_theme: from.to_string(),
            to_theme: to.to_string(),
            usage_stats: usage,
            method: "theme_command".to_string(),
        }
    }
}

/// One `form_history` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormEntry {
    pub timestamp: DateTime<Utc>,
    /// `on`, `off` or `edit`.
    pub operation: String,
    pub theme: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub usage_stats: UsageStats,
}

/// `project_metadata` written by `gen`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub product_description: String,
    pub brand_name: String,
    pub theme: String,
    pub framework: String,
    pub created_at: DateTime<Utc>,
}

/// One `design_phases` entry of a full run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseStat {
    pub phase: u32,
    pub name: String,
    pub duration_seconds: f64,
    pub usage: UsageStats,
}

/// `generation_stats` of a fast run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationStats {
    pub duration_seconds: f64,
    pub attempts: u32,
}
