//! Implementation of the `ccux editgen` command.

use super::{
    Session, report_outcomes, requested_sections, resolve_description, select_project_dir,
};
use crate::analysis::{DesignAnalysis, EditEntry};
use crate::content::{minify_html, strip_code_fences};
use crate::cli::EditgenArgs;
use crate::error::{CcuxError, Result};
use crate::fs::{atomic_write_file, read_text};
use crate::pipeline::retry::validate_output;
use crate::project;
use crate::prompts;
use crate::sections::{self, SectionDocument};
use crate::ui;

/// Execute the `ccux editgen` command.
///
/// With `--sections` only those regions travel to the generator and the
/// edited blocks are merged back; otherwise the whole page is replaced.
pub fn cmd_editgen(session: &Session, args: EditgenArgs) -> Result<()> {
    let instruction = args.instruction.trim();
    if instruction.is_empty() {
        return Err(CcuxError::UserError(
            "an edit instruction is required\nFix: ccux editgen \"make the hero headline shorter\""
                .to_string(),
        ));
    }

    let dir = select_project_dir(session, args.output.as_deref())?;
    let page = project::resolve_page(&dir, args.file.as_deref())?;
    let html = read_text(&page)?;
    let framework = project::framework_of(&page);
    let context = project::page_context(&page, &html);
    let theme_name = context
        .get("detected_theme")
        .cloned()
        .unwrap_or_else(|| session.config.theme.clone());

    let mut analysis = DesignAnalysis::load(&dir)?;
    let description = resolve_description(args.desc.as_deref(), &analysis)?;
    for issue in sections::diagnose(&html) {
        ui::warn(&issue);
    }
    let document = SectionDocument::parse(&html);

    ui::header(&format!("Editing: {}", instruction));
    ui::field("Page", &page.display().to_string());

    let (updated, affected, usage) = match &args.sections {
        Some(list) => {
            let requested = requested_sections(list)?;
            let (present, missing) = sections::partition_names(&requested, &document.names());
            if !missing.is_empty() {
                return Err(CcuxError::UserError(format!(
                    "sections not found in {}: {}\nFix: available sections are {}.",
                    page.display(),
                    missing.join(", "),
                    available_list(&document)
                )));
            }
            for name in &present {
                let related: Vec<String> = sections::related_sections(name, &document.names())
                    .into_iter()
                    .filter(|r| !present.contains(r))
                    .collect();
                if !related.is_empty() {
                    ui::info(&format!(
                        "Editing {} may also call for updating: {}",
                        name,
                        related.join(", ")
                    ));
                }
            }
            let current: Vec<String> = present
                .iter()
                .filter_map(|name| document.region(name).map(|r| r.block()))
                .collect();
            let prompt = prompts::editgen_sections_prompt(
                &description,
                framework,
                &theme_name,
                instruction,
                &present,
                &current.join("\n\n"),
            );
            let out = session.runner()?.run(&prompt, "Editing sections")?;
            let edited = strip_code_fences(&out.text);
            if SectionDocument::parse(&edited).names().is_empty() {
                return Err(CcuxError::GeneratorError(
                    "Claude Code returned no marked sections; the page was left unchanged"
                        .to_string(),
                ));
            }
            let (merged, outcomes) = sections::merge_sections(&html, &edited);
            report_outcomes(&outcomes);
            let touched: Vec<String> = outcomes.into_iter().map(|(name, _)| name).collect();
            (merged, touched, out.usage)
        }
        None => {
            let affected = mentioned_sections(instruction, &document.names());
            let prompt = prompts::editgen_prompt(
                &description,
                framework,
                &theme_name,
                instruction,
                &context,
                &affected,
                &minify_html(&html),
            );
            let out = session.runner()?.run(&prompt, "Editing page")?;
            (out.text, affected, out.usage)
        }
    };

    let cleaned = validate_output(framework, &updated).map_err(CcuxError::ValidationError)?;
    // Merged pages keep untouched bytes as they were.
    let updated = if args.sections.is_some() {
        updated
    } else {
        cleaned
    };
    atomic_write_file(&page, &updated)?;

    if DesignAnalysis::exists(&dir) {
        analysis.push("edit_history", EditEntry::new(instruction, affected, usage))?;
        analysis.touch();
        analysis.save()?;
    }

    ui::success(&format!("Updated {}", page.display()));
    if !usage.is_empty() {
        ui::field("Usage", &usage.to_string());
    }
    Ok(())
}

/// Existing section names mentioned in the instruction.
fn mentioned_sections(instruction: &str, names: &[String]) -> Vec<String> {
    let lower = instruction.to_lowercase();
    names
        .iter()
        .filter(|name| lower.contains(name.as_str()))
        .cloned()
        .collect()
}

fn available_list(document: &SectionDocument) -> String {
    let names = document.names();
    if names.is_empty() {
        "none (the page has no section markers)".to_string()
    } else {
        names.join(", ")
    }
}
