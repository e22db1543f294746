//! Command implementations for ccux.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the lookups several commands share: which project
//! to work on, which page to edit and which product description to use.

mod cost;
mod editgen;
mod form;
mod gen_cmd;
mod help;
mod init;
mod projects;
mod regen;
mod theme_cmd;
mod version;

#[cfg(all(test, unix))]
mod tests;

pub use cost::cmd_cost;
pub use editgen::cmd_editgen;
pub use form::cmd_form;
pub use gen_cmd::cmd_gen;
pub use help::cmd_help;
pub use init::cmd_init;
pub use projects::cmd_projects;
pub use regen::cmd_regen;
pub use theme_cmd::cmd_theme;
pub use version::cmd_version;

use crate::analysis::DesignAnalysis;
use crate::cli::{Command, split_list};
use crate::config::Config;
use crate::content::truncate_chars;
use crate::error::{CcuxError, Result};
use crate::interrupt::CancelToken;
use crate::project;
use crate::runner::Runner;
use crate::sections::{self, ReplaceOutcome};
use crate::ui;
use std::path::{Path, PathBuf};

/// Per-invocation state handed to every command.
#[derive(Clone)]
pub struct Session {
    pub config: Config,
    pub token: CancelToken,
}

impl Session {
    pub fn new(config: Config, token: CancelToken) -> Self {
        Self { config, token }
    }

    pub fn runner(&self) -> Result<Runner> {
        Runner::new(&self.config, self.token.clone())
    }
}

/// Dispatch a command to its implementation.
///
/// No command starts the interactive wizard.
pub fn dispatch(command: Option<Command>, session: &Session) -> Result<()> {
    let Some(command) = command else {
        return cmd_init(session);
    };
    match command {
        Command::Init => cmd_init(session),
        Command::Gen(args) => cmd_gen(session, args),
        Command::Regen(args) => cmd_regen(session, args),
        Command::Editgen(args) => cmd_editgen(session, args),
        Command::Theme(args) => cmd_theme(session, args),
        Command::Form(args) => cmd_form(session, args),
        Command::Projects => cmd_projects(session),
        Command::Cost(args) => cmd_cost(args),
        Command::Help(args) => cmd_help(args),
        Command::Version => cmd_version(session),
    }
}

/// Project directory to edit: `--output`, else pick among discovered projects.
///
/// A single project is used directly; none means the current directory.
pub(crate) fn select_project_dir(session: &Session, output: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = output {
        if !dir.is_dir() {
            return Err(CcuxError::UserError(format!(
                "project directory not found: '{}'",
                dir.display()
            )));
        }
        return Ok(dir.to_path_buf());
    }

    let projects = project::discover(Path::new("."), &session.config.output_dir)?;
    match projects.len() {
        0 => Ok(PathBuf::from(".")),
        1 => {
            ui::info(&format!("Using project: {}", projects[0].name));
            Ok(projects[0].dir.clone())
        }
        _ => {
            let labels: Vec<String> = projects
                .iter()
                .map(|p| format!("{} ({})", p.name, p.dir.display()))
                .collect();
            let options: Vec<&str> = labels.iter().map(String::as_str).collect();
            let index = ui::choose("Select a project", &options, 0)?;
            Ok(projects[index].dir.clone())
        }
    }
}

/// Description to use for edits: `--desc`, the recorded one, else ask.
pub(crate) fn resolve_description(
    arg: Option<&str>,
    analysis: &DesignAnalysis,
) -> Result<String> {
    if let Some(desc) = arg.map(str::trim).filter(|d| !d.is_empty()) {
        return Ok(desc.to_string());
    }
    if let Some(desc) = analysis.product_description() {
        tracing::debug!(desc = %truncate_chars(&desc, 60), "using recorded description");
        return Ok(desc);
    }
    let desc = ui::ask("Product description", None)?;
    if desc.trim().is_empty() {
        return Err(CcuxError::UserError(
            "a product description is required\nFix: pass --desc \"...\".".to_string(),
        ));
    }
    Ok(desc)
}

/// Lowercased section names from a comma-separated list.
///
/// Names that cannot appear in a marker are rejected; non-standard names
/// only warn.
pub(crate) fn requested_sections(list: &str) -> Result<Vec<String>> {
    let names: Vec<String> = split_list(list).iter().map(|n| n.to_lowercase()).collect();
    if names.is_empty() {
        return Err(CcuxError::UserError(
            "no section names given\nFix: pass a comma-separated list such as hero,pricing."
                .to_string(),
        ));
    }
    if let Some(bad) = names.iter().find(|n| !sections::is_valid_name(n)) {
        return Err(CcuxError::UserError(format!(
            "invalid section name '{}'\nFix: use letters, digits and underscores only.",
            bad
        )));
    }
    for warning in sections::validate_names(&names) {
        ui::warn(&warning);
    }
    Ok(names)
}

/// Print one line per replaced or appended section.
pub(crate) fn report_outcomes(outcomes: &[(String, ReplaceOutcome)]) {
    for (name, outcome) in outcomes {
        match outcome {
            ReplaceOutcome::Replaced(kind) => {
                tracing::debug!(section = %name, ?kind, "section replaced");
                ui::step(&format!("Updated {}", name));
            }
            ReplaceOutcome::Appended(placement) => {
                tracing::debug!(section = %name, ?placement, "section appended");
                ui::step(&format!("Added {} (no existing section matched)", name));
            }
        }
    }
}
