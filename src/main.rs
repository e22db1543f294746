//! ccux: landing page generator driven by Claude Code.
//!
//! This is the main entry point for the `ccux` CLI. It parses arguments,
//! sets up logging, configuration and interrupt handling, dispatches to the
//! command handler, and maps errors to exit codes.

mod analysis;
mod cli;
mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod interrupt;
mod logging;
mod pipeline;
mod process;
mod project;
mod prompts;
mod runner;
pub mod sections;
#[cfg(test)]
mod test_support;
pub mod theme;
mod ui;
pub mod usage;

use cli::Cli;
use commands::Session;
use config::Config;
use interrupt::CancelToken;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {:#}", e);
    }

    let config = Config::load_or_default(cli.config.as_deref());
    if let Err(err) = config.validate() {
        eprintln!("Error: {}", err);
        return ExitCode::from(err.exit_code() as u8);
    }

    let token = CancelToken::new();
    if let Err(e) = interrupt::install(token.clone()) {
        tracing::warn!(error = %e, "failed to install interrupt handler");
    }

    let session = Session::new(config, token);
    match commands::dispatch(cli.command, &session) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
