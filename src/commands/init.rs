//! Implementation of the `ccux init` wizard.
//!
//! A menu loop over every command. Each entry gathers its arguments with
//! prompts and calls the same `cmd_*` function the CLI uses, so the wizard
//! never has behavior of its own. A failed command is reported and the
//! menu is shown again; failing to read the menu choice ends the wizard.

use super::{
    Session, cmd_cost, cmd_editgen, cmd_form, cmd_gen, cmd_projects, cmd_regen, cmd_theme,
};
use crate::cli::{CostArgs, EditgenArgs, FormArgs, GenArgs, RegenArgs, ThemeArgs};
use crate::config::CONFIG_FILE;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::prompts::{FormStyle, FormType};
use crate::runner;
use crate::ui;
use std::path::Path;

const MENU: [&str; 8] = [
    "Create a new landing page",
    "Regenerate sections",
    "Change theme",
    "Edit content",
    "Manage forms",
    "List projects",
    "Usage costs",
    "Exit",
];

/// Execute the `ccux init` command (also the default without a subcommand).
pub fn cmd_init(session: &Session) -> Result<()> {
    ui::header("ccux: landing page generator");
    if !runner::validate_command(&session.config.claude_cmd) {
        ui::warn(&format!(
            "'{}' did not answer --version; generation commands will fail until Claude Code is installed",
            session.config.claude_cmd
        ));
    }
    offer_config_file(session)?;

    loop {
        let choice = ui::choose("What would you like to do?", &MENU, 0)?;
        let outcome = match choice {
            0 => cmd_gen(session, GenArgs::default()),
            1 => regen_from_prompts().and_then(|args| cmd_regen(session, args)),
            2 => cmd_theme(session, ThemeArgs::default()),
            3 => editgen_from_prompts().and_then(|args| cmd_editgen(session, args)),
            4 => form_from_prompts().and_then(|args| cmd_form(session, args)),
            5 => cmd_projects(session),
            6 => cmd_cost(CostArgs::default()),
            _ => {
                ui::info("Goodbye");
                return Ok(());
            }
        };
        if let Err(e) = outcome {
            tracing::debug!(error = %e, "wizard command failed");
            ui::warn(&e.to_string());
        }
    }
}

/// Write the effective settings to `ccux.yaml` when none exists yet.
fn offer_config_file(session: &Session) -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() || !ui::confirm("Create ccux.yaml with the current settings?", false)? {
        return Ok(());
    }
    atomic_write_file(path, &session.config.to_yaml()?)?;
    ui::success(&format!("Wrote {}", CONFIG_FILE));
    Ok(())
}

fn regen_from_prompts() -> Result<RegenArgs> {
    let answer = ui::ask("Sections to regenerate (comma-separated, or 'all')", Some("all"))?;
    let all = answer.trim().eq_ignore_ascii_case("all");
    Ok(RegenArgs {
        section: (!all).then_some(answer),
        all,
        ..RegenArgs::default()
    })
}

fn editgen_from_prompts() -> Result<EditgenArgs> {
    let instruction = ui::ask("Describe the change", None)?;
    let sections = ui::ask("Limit to sections (comma-separated, empty for whole page)", Some(""))?;
    Ok(EditgenArgs {
        instruction,
        sections: (!sections.trim().is_empty()).then_some(sections),
        ..EditgenArgs::default()
    })
}

fn form_from_prompts() -> Result<FormArgs> {
    let states = ["on", "off", "edit"];
    let state = states[ui::choose("Form action", &states, 0)?];
    if state != "edit" {
        return Ok(FormArgs {
            state: state.to_string(),
            ..FormArgs::default()
        });
    }

    let form_type = FormType::NAMES[ui::choose("Form type", &FormType::NAMES, 0)?];
    let style = FormStyle::NAMES[ui::choose("Form style", &FormStyle::NAMES, 0)?];
    let fields = ui::ask("Fields (comma-separated, empty for defaults)", Some(""))?;
    let cta = ui::ask("Submit button text", Some("Submit"))?;
    Ok(FormArgs {
        state: state.to_string(),
        form_type: Some(form_type.to_string()),
        fields: (!fields.trim().is_empty()).then_some(fields),
        style: Some(style.to_string()),
        cta: Some(cta),
        ..FormArgs::default()
    })
}
