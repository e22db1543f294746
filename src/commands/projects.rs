//! Implementation of the `ccux projects` command.
//!
//! Lists generated projects in the current directory with their display
//! name, generation mode, theme, creation time and lifetime cost.

use super::Session;
use crate::error::Result;
use crate::project;
use crate::ui;
use crate::usage::format_cost;
use std::path::Path;

/// Execute the `ccux projects` command.
pub fn cmd_projects(session: &Session) -> Result<()> {
    let projects = project::discover(Path::new("."), &session.config.output_dir)?;
    if projects.is_empty() {
        ui::info(&format!(
            "No projects found. Create one with: ccux gen --desc \"...\" (projects live in {}, {}1, ...)",
            session.config.output_dir, session.config.output_dir
        ));
        return Ok(());
    }

    println!("Projects");
    println!("========");
    println!();
    println!(
        "  {:30}  {:10}  {:5}  {:12}  {:16}  {:>9}",
        "Name", "Directory", "Mode", "Theme", "Created", "Cost"
    );
    for entry in &projects {
        let summary = project::summarize(&entry.dir);
        let dir_name = entry
            .dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.dir.display().to_string());
        println!(
            "  {:30}  {:10}  {:5}  {:12}  {:16}  {:>9}",
            entry.name,
            dir_name,
            summary.mode,
            summary.theme,
            summary.created,
            format_cost(summary.cost)
        );
    }
    println!();
    println!("{} project(s)", projects.len());
    Ok(())
}
