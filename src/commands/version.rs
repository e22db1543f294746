//! Implementation of the `ccux version` command.

use super::Session;
use crate::error::Result;
use crate::runner;
use crate::ui;

/// Execute the `ccux version` command.
pub fn cmd_version(session: &Session) -> Result<()> {
    println!("ccux {}", env!("CARGO_PKG_VERSION"));
    match runner::version(&session.config.claude_cmd) {
        Some(line) => println!("Claude Code: {}", line),
        None => ui::warn(&format!(
            "'{}' is not reachable; install Claude Code or set claude_cmd in ccux.yaml",
            session.config.claude_cmd
        )),
    }
    Ok(())
}
