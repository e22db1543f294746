//! Page generation: fast single-call mode and the full design pipeline.

mod fast;
mod full;
mod output;
mod references;
pub mod retry;


pub use full::{Implementation, PhaseTracker, TOTAL_PHASES, implement};
pub use output::{write_debug_output, write_page};
pub use references::MAX_REFERENCES;

use crate::analysis::{DesignAnalysis, ProjectMetadata};
use crate::config::Framework;
use crate::content::{extract_brand_name, truncate_chars, word_count};
use crate::error::{CcuxError, Result};
use crate::prompts;
use crate::runner::Runner;
use crate::sections::SectionDocument;
use crate::ui;
use crate::usage::UsageStats;
use chrono::Utc;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One generator call, no research.
    Fast,
    /// Twelve-phase design pipeline.
    Full,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Fast => "fast",
            Mode::Full => "full",
        }
    }
}

/// Everything `gen` needs, already validated.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub description: String,
    pub framework: Framework,
    pub theme: String,
    pub sections: Vec<String>,
    pub output_dir: PathBuf,
    pub urls: Vec<String>,
    pub include_forms: bool,
    pub mode: Mode,
    pub max_attempts: u32,
    /// Usage spent before the pipeline started (description summary).
    pub prior_usage: UsageStats,
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub page: PathBuf,
    pub usage: UsageStats,
    pub duration: Duration,
}

/// Shorten descriptions above `threshold` words with one generator call.
///
/// Any failure keeps the original text.
pub fn summarize_description(
    runner: &Runner,
    description: &str,
    threshold: usize,
) -> (String, UsageStats) {
    let words = word_count(description);
    if words <= threshold {
        return (description.to_string(), UsageStats::default());
    }

    ui::step(&format!(
        "Description has {} words, summarizing to keep prompts focused",
        words
    ));
    match runner.run(
        &prompts::summarize_prompt(description),
        "Summarizing description",
    ) {
        Ok(out) if !out.text.trim().is_empty() => (out.text.trim().to_string(), out.usage),
        Ok(out) => {
            tracing::warn!("summary was empty, keeping original description");
            (description.to_string(), out.usage)
        }
        Err(e) => {
            ui::warn(&format!("summarization failed ({}); using the full description", e));
            (description.to_string(), UsageStats::default())
        }
    }
}

/// Run the requested mode and write the page plus `design_analysis.json`.
pub fn generate(runner: &Runner, request: &GenerationRequest) -> Result<GenerationOutcome> {
    std::fs::create_dir_all(&request.output_dir)
        .map_err(|e| CcuxError::io("create directory", &request.output_dir, e))?;
    tracing::info!(
        mode = request.mode.label(),
        dir = %request.output_dir.display(),
        framework = %request.framework,
        theme = %request.theme,
        "starting generation"
    );

    match request.mode {
        Mode::Fast => fast::run(runner, request),
        Mode::Full => full::run(runner, request),
    }
}

/// Title for the React shell page.
fn page_title(description: &str) -> String {
    truncate_chars(description, 80)
}

/// Keys every generation writes, whatever the mode.
fn record_generation(
    analysis: &mut DesignAnalysis,
    request: &GenerationRequest,
    page_text: &str,
    usage: UsageStats,
) -> Result<()> {
    let now = Utc::now();
    analysis.set("generation_mode", request.mode.label())?;
    analysis.set("created_at", now.to_rfc3339())?;
    analysis.set("product_description", &request.description)?;
    analysis.set(
        "project_metadata",
        ProjectMetadata {
            product_description: request.description.clone(),
            brand_name: extract_brand_name(&request.description),
            theme: request.theme.clone(),
            framework: request.framework.to_string(),
            created_at: now,
        },
    )?;
    analysis.set("theme", &request.theme)?;
    analysis.set("framework", request.framework.to_string())?;

    let found = SectionDocument::parse(page_text).names();
    let sections = if found.is_empty() {
        request.sections.clone()
    } else {
        found
    };
    analysis.set("sections", sections)?;
    analysis.set("total_usage", usage + request.prior_usage)?;
    analysis.touch();
    Ok(())
}
