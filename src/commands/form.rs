//! Implementation of the `ccux form` command.

use super::{Session, resolve_description, select_project_dir};
use crate::analysis::{DesignAnalysis, FormEntry};
use crate::cli::{FormArgs, split_list};
use crate::config::Framework;
use crate::error::{CcuxError, Result};
use crate::fs::{atomic_write_file, read_text};
use crate::pipeline::retry::validate_output;
use crate::project;
use crate::prompts::{self, FormStyle, FormType};
use crate::theme;
use crate::ui;
use chrono::Utc;

/// What `form` does to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormState {
    On,
    Off,
    Edit,
}

impl FormState {
    fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "edit" => Ok(Self::Edit),
            other => Err(CcuxError::UserError(format!(
                "unknown form state '{}'\nFix: use one of: on, off, edit.",
                other
            ))),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Edit => "edit",
        }
    }
}

/// Execute the `ccux form` command.
pub fn cmd_form(session: &Session, args: FormArgs) -> Result<()> {
    let state = FormState::parse(&args.state)?;
    let form_type = args
        .form_type
        .as_deref()
        .map(FormType::parse)
        .transpose()?
        .unwrap_or_default();
    let style = args.style.as_deref().map(FormStyle::parse).transpose()?;
    let fields = match args.fields.as_deref().map(split_list) {
        Some(fields) if !fields.is_empty() => fields,
        _ => form_type.default_fields(),
    };

    let dir = select_project_dir(session, args.output.as_deref())?;
    let page = project::resolve_page(&dir, args.file.as_deref())?;
    if project::framework_of(&page) == Framework::React {
        return Err(CcuxError::UserError(format!(
            "form editing supports HTML pages only, got {}\nFix: pass --file pointing at an index.html.",
            page.display()
        )));
    }
    let html = read_text(&page)?;
    let theme_name = theme::detect_theme(&html);
    let mut analysis = DesignAnalysis::load(&dir)?;

    let prompt = match state {
        FormState::On => {
            let description = resolve_description(None, &analysis)?;
            prompts::form_on_prompt(&description, &html, theme_name)
        }
        FormState::Off => prompts::form_off_prompt(&html),
        FormState::Edit => prompts::form_edit_prompt(
            &html,
            form_type,
            &fields,
            style,
            args.cta.as_deref(),
            theme_name,
        ),
    };

    ui::header(&format!("Forms: {}", state.as_str()));
    ui::field("Page", &page.display().to_string());
    if state == FormState::Edit {
        ui::field("Type", &form_type.to_string());
        ui::field("Fields", &fields.join(", "));
    }

    let out = session.runner()?.run(&prompt, "Updating forms")?;
    let updated =
        validate_output(Framework::Html, &out.text).map_err(CcuxError::ValidationError)?;
    atomic_write_file(&page, &updated)?;

    let forms = updated.matches("<form").count();
    ui::success(&format!("Page now contains {} form(s)", forms));

    if DesignAnalysis::exists(&dir) {
        let edit = state == FormState::Edit;
        analysis.push(
            "form_history",
            FormEntry {
                timestamp: Utc::now(),
                operation: state.as_str().to_string(),
                theme: theme_name.to_string(),
                method: "form_command".to_string(),
                form_type: edit.then(|| form_type.to_string()),
                fields: if edit { fields } else { Vec::new() },
                cta_text: if edit { args.cta.clone() } else { None },
                style: style.filter(|_| edit).map(|s| s.to_string()),
                usage_stats: out.usage,
            },
        )?;
        analysis.touch();
        analysis.save()?;
    }

    if !out.usage.is_empty() {
        ui::field("Usage", &out.usage.to_string());
    }
    Ok(())
}
