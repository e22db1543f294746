//! Terminal output: colored status lines, spinners and interactive prompts.
//!
//! Status lines go to stdout; warnings go to stderr so they never end up in
//! redirected page output.

mod progress;
mod prompt;

pub use progress::Spinner;
pub use prompt::{ask, choose, confirm};

use colored::Colorize;

pub fn header(message: &str) {
    println!("\n{}", message.bold().cyan());
}

pub fn step(message: &str) {
    println!("{} {}", "->".blue().bold(), message);
}

pub fn success(message: &str) {
    println!("{} {}", "OK".green().bold(), message);
}

pub fn info(message: &str) {
    println!("{}", message.dimmed());
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// `label: value` with a bold label.
pub fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{}:", label).bold(), value);
}
