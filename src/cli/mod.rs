//! CLI argument parsing for ccux.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ccux: generate and edit conversion-focused landing pages with Claude Code.
///
/// Pages are produced either in one call (fast mode) or through a
/// twelve-phase design thinking pipeline, and can later be edited section
/// by section.
#[derive(Parser, Debug)]
#[command(name = "ccux")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ./ccux.yaml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command to run; the interactive menu starts when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for ccux.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive wizard for every command.
    Init,

    /// Generate a new landing page.
    ///
    /// Runs the full design thinking pipeline unless --no-design-thinking
    /// is given.
    Gen(GenArgs),

    /// Regenerate specific sections of an existing page.
    Regen(RegenArgs),

    /// Apply a free-form edit instruction to an existing page.
    Editgen(EditgenArgs),

    /// Switch a generated page to another theme.
    Theme(ThemeArgs),

    /// Add, remove or customize forms on a page.
    Form(FormArgs),

    /// List generated projects in the current directory.
    Projects,

    /// Show token usage and cost per project.
    Cost(CostArgs),

    /// Show help for a topic (quickstart, themes, examples, workflows).
    Help(HelpArgs),

    /// Show ccux and Claude Code versions.
    Version,
}

/// Arguments for the `gen` command.
#[derive(Parser, Debug, Default)]
pub struct GenArgs {
    /// Product description.
    #[arg(short, long)]
    pub desc: Option<String>,

    /// Read the product description from a file.
    #[arg(long, value_name = "PATH")]
    pub desc_file: Option<PathBuf>,

    /// Reference site URL (repeatable, at most 3).
    #[arg(short, long = "url")]
    pub urls: Vec<String>,

    /// Output framework (html, react).
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Design theme.
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Output directory (default: next free output, output1, ...).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Single-call generation without research and design phases.
    #[arg(long)]
    pub no_design_thinking: bool,

    /// Ask for a working contact form as the primary CTA.
    #[arg(long)]
    pub include_forms: bool,
}

/// Arguments for the `regen` command.
#[derive(Parser, Debug, Default)]
pub struct RegenArgs {
    /// Comma-separated section names (e.g. hero,pricing).
    #[arg(short, long, conflicts_with = "all")]
    pub section: Option<String>,

    /// Regenerate every section on the page.
    #[arg(long)]
    pub all: bool,

    /// Product description (default: from design_analysis.json).
    #[arg(short, long)]
    pub desc: Option<String>,

    /// Page file to edit.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Project directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `editgen` command.
#[derive(Parser, Debug, Default)]
pub struct EditgenArgs {
    /// What to change, in plain words.
    pub instruction: String,

    /// Product description (default: from design_analysis.json).
    #[arg(short, long)]
    pub desc: Option<String>,

    /// Page file to edit.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Project directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only send these comma-separated sections.
    #[arg(long)]
    pub sections: Option<String>,
}

/// Arguments for the `theme` command.
#[derive(Parser, Debug, Default)]
pub struct ThemeArgs {
    /// New theme; chosen interactively when omitted.
    pub new_theme: Option<String>,

    /// Page file to replace.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Project directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `form` command.
#[derive(Parser, Debug, Default)]
pub struct FormArgs {
    /// on, off or edit.
    pub state: String,

    /// Form type (contact, newsletter, signup, custom).
    #[arg(long = "type")]
    pub form_type: Option<String>,

    /// Comma-separated field names.
    #[arg(long)]
    pub fields: Option<String>,

    /// Form style (inline, modal, sidebar, fullpage).
    #[arg(long)]
    pub style: Option<String>,

    /// Submit button text.
    #[arg(long)]
    pub cta: Option<String>,

    /// Project directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page file to edit.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `cost` command.
#[derive(Parser, Debug, Default)]
pub struct CostArgs {
    /// Project directory; every project in the current directory when omitted.
    pub project_dir: Option<PathBuf>,

    /// List every recorded operation.
    #[arg(long)]
    pub detailed: bool,

    /// Show totals even for a single project.
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the `help` command.
#[derive(Parser, Debug, Default)]
pub struct HelpArgs {
    /// Topic name.
    pub topic: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Split a comma-separated list, dropping blanks.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
