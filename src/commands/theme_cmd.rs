//! Implementation of the `ccux theme` command.
//!
//! Switching themes reruns the visual phases of the pipeline (design
//! system, high-fidelity design, implementation) against the research and
//! copy already recorded in `design_analysis.json`.

use super::{Session, select_project_dir};
use crate::analysis::{DesignAnalysis, ThemeEntry};
use crate::cli::ThemeArgs;
use crate::error::{CcuxError, Result};
use crate::fs::{atomic_write_file, read_text};
use crate::pipeline::{Implementation, PhaseTracker, TOTAL_PHASES, implement};
use crate::project;
use crate::prompts::{self, DesignInputs};
use crate::theme;
use crate::ui;
use chrono::Utc;
use std::time::Instant;

/// Execute the `ccux theme` command.
pub fn cmd_theme(session: &Session, args: ThemeArgs) -> Result<()> {
    let dir = select_project_dir(session, args.output.as_deref())?;
    let page = project::resolve_page(&dir, args.file.as_deref())?;
    let mut analysis = DesignAnalysis::load_existing(&dir)?;
    let description = analysis.product_description().ok_or_else(|| {
        CcuxError::UserError(format!(
            "no product description recorded in {}\nFix: regenerate the project with ccux gen.",
            analysis.path().display()
        ))
    })?;

    let html = read_text(&page)?;
    let current = analysis
        .theme()
        .unwrap_or_else(|| theme::detect_theme(&html).to_string());

    let requested = match &args.new_theme {
        Some(name) => name.clone(),
        None => choose_theme(&current)?,
    };
    let new_theme = session.config.resolve_theme(Some(&requested))?;
    if new_theme == current {
        ui::info(&format!("Project already uses the '{}' theme; nothing to do", current));
        return Ok(());
    }

    ui::header(&format!("Changing theme: {} -> {}", current, new_theme));
    ui::field("Page", &page.display().to_string());

    let started = Instant::now();
    let framework = project::framework_of(&page);
    let wireframes = analysis.phase("wireframes");
    let content_strategy = analysis.phase("content_strategy");
    let ux_analysis = analysis.phase("ux_analysis");
    let final_copy = analysis.phase("final_copy");

    let runner = session.runner()?;
    let mut tracker = PhaseTracker::new(&runner, TOTAL_PHASES);
    let design_system = tracker.json(
        9,
        "Design system",
        &prompts::design_system_prompt(&description, &wireframes, &content_strategy, &new_theme),
    )?;
    let hifi_design = tracker.json(
        10,
        "High-fidelity design",
        &prompts::high_fidelity_prompt(
            &description,
            &design_system,
            &wireframes,
            &content_strategy,
        ),
    )?;
    let (updated, attempts) = implement(
        &mut tracker,
        12,
        &Implementation {
            description: &description,
            final_copy: &final_copy,
            framework,
            theme: &new_theme,
            design: DesignInputs {
                design_system: &design_system,
                content_strategy: &content_strategy,
                ux_analysis: &ux_analysis,
                wireframes: &wireframes,
            },
            include_forms: html.contains("<form"),
            max_attempts: session.config.max_implementation_attempts,
        },
        &dir,
    )?;
    tracing::info!(attempts, theme = %new_theme, "theme implementation validated");
    atomic_write_file(&page, &updated)?;

    let usage = tracker.usage();
    analysis.set("design_system", design_system)?;
    analysis.set("hifi_design", hifi_design)?;
    analysis.set("current_theme", &new_theme)?;
    analysis.set("theme", &new_theme)?;
    analysis.set_path(&["project_metadata", "theme"], &new_theme)?;
    analysis.push("theme_history", ThemeEntry::new(&current, &new_theme, usage))?;
    analysis.set("last_updated", Utc::now().to_rfc3339())?;
    analysis.save()?;

    ui::success(&format!(
        "Theme changed to '{}' in {:.1}s",
        new_theme,
        started.elapsed().as_secs_f64()
    ));
    if !usage.is_empty() {
        ui::field("Usage", &usage.to_string());
    }
    Ok(())
}

/// Interactive theme picker grouped by category.
fn choose_theme(current: &str) -> Result<String> {
    let mut names = Vec::new();
    let mut labels = Vec::new();
    for category in theme::ThemeCategory::ALL {
        for name in category.members() {
            names.push(*name);
            labels.push(format!(
                "[{}] {}: {}",
                category.label(),
                name,
                theme::description(name)
            ));
        }
    }
    let options: Vec<&str> = labels.iter().map(String::as_str).collect();
    let default = names.iter().position(|n| *n == current).unwrap_or(0);
    let index = ui::choose("New theme", &options, default)?;
    Ok(names[index].to_string())
}
