//! Implementation of the `ccux regen` command.
//!
//! One generator call produces fresh blocks for the requested sections;
//! each block replaces its region in place (or is appended when the page
//! has no such region) and every other byte of the page is kept.

use super::{
    Session, report_outcomes, requested_sections, resolve_description, select_project_dir,
};
use crate::analysis::{DesignAnalysis, RegenerationEntry};
use crate::cli::RegenArgs;
use crate::error::{CcuxError, Result};
use crate::fs::{atomic_write_file, read_text};
use crate::project;
use crate::prompts;
use crate::sections::{self, DEFAULT_REGEN_SECTIONS, SectionDocument};
use crate::ui;
use chrono::Utc;

/// Execute the `ccux regen` command.
pub fn cmd_regen(session: &Session, args: RegenArgs) -> Result<()> {
    if args.section.is_none() && !args.all {
        return Err(CcuxError::UserError(
            "no sections selected\nFix: pass --section hero,pricing or --all.".to_string(),
        ));
    }

    let dir = select_project_dir(session, args.output.as_deref())?;
    let page = project::resolve_page(&dir, args.file.as_deref())?;
    let html = read_text(&page)?;
    for issue in sections::diagnose(&html) {
        ui::warn(&issue);
    }
    for (name, meta) in sections::summarize(&html) {
        tracing::debug!(section = %name, ?meta, "existing section");
    }
    let existing = SectionDocument::parse(&html).names();

    let requested = match &args.section {
        Some(list) => requested_sections(list)?,
        None if existing.is_empty() => DEFAULT_REGEN_SECTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        None => existing.clone(),
    };
    let ordered = sections::order_semantically(&requested);

    let mut analysis = DesignAnalysis::load(&dir)?;
    let description = resolve_description(args.desc.as_deref(), &analysis)?;
    let context = project::page_context(&page, &html);
    let theme_name = context
        .get("detected_theme")
        .cloned()
        .unwrap_or_else(|| session.config.theme.clone());
    let framework = project::framework_of(&page);

    ui::header(&format!("Regenerating sections: {}", ordered.join(", ")));
    ui::field("Page", &page.display().to_string());
    ui::field("Theme", &theme_name);

    let prompt =
        prompts::regeneration_prompt(&description, framework, &theme_name, &ordered, &context);
    let out = session.runner()?.run(&prompt, "Regenerating sections")?;

    let bodies = sections::extract_section_bodies(&out.text);
    if bodies.is_empty() {
        return Err(CcuxError::GeneratorError(
            "Claude Code returned no marked sections; the page was left unchanged".to_string(),
        ));
    }
    let generated: Vec<String> = bodies.keys().cloned().collect();
    let (_, missing) = sections::partition_names(&ordered, &generated);
    for name in &missing {
        ui::warn(&format!("section '{}' was not in the generated output", name));
    }

    let (updated, outcomes) = sections::replace_sections(&html, &bodies, &ordered);
    if outcomes.is_empty() {
        return Err(CcuxError::GeneratorError(
            "none of the requested sections were generated; the page was left unchanged"
                .to_string(),
        ));
    }
    atomic_write_file(&page, &updated)?;
    report_outcomes(&outcomes);

    if DesignAnalysis::exists(&dir) {
        let names: Vec<String> = outcomes.iter().map(|(name, _)| name.clone()).collect();
        analysis.push(
            "regeneration_history",
            RegenerationEntry::new(names.clone(), &description, out.usage),
        )?;
        analysis.touch();
        analysis.add_sections(&names);
        analysis.set_path(&["product_understanding", "description"], &description)?;
        analysis.set_path(
            &["product_understanding", "last_updated"],
            Utc::now().to_rfc3339(),
        )?;
        analysis.save()?;
    }

    ui::success(&format!("Regenerated {} section(s)", outcomes.len()));
    if !out.usage.is_empty() {
        ui::field("Usage", &out.usage.to_string());
    }
    Ok(())
}
