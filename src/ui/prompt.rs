//! Line-based interactive prompts.
//!
//! Each prompt has a `_with` variant over any reader/writer pair so it can be
//! driven from tests.

use crate::error::{CcuxError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| CcuxError::UserError(format!("failed to read input: {}", e)))?;
    if read == 0 {
        return Err(CcuxError::UserError(
            "no input available\nFix: pass the value as a command-line flag.".to_string(),
        ));
    }
    Ok(line.trim().to_string())
}

fn flush<W: Write>(output: &mut W) -> Result<()> {
    output
        .flush()
        .map_err(|e| CcuxError::UserError(format!("failed to write prompt: {}", e)))
}

/// Ask for free text; an empty answer takes `default` when given, otherwise re-asks.
pub fn ask_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: Option<&str>,
) -> Result<String> {
    loop {
        let written = match default {
            Some(d) => write!(output, "{} [{}]: ", question.bold(), d),
            None => write!(output, "{}: ", question.bold()),
        };
        written.map_err(|e| CcuxError::UserError(format!("failed to write prompt: {}", e)))?;
        flush(output)?;

        let answer = read_answer(input)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        if let Some(d) = default {
            return Ok(d.to_string());
        }
    }
}

pub fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    write!(output, "{} {}: ", question.bold(), hint)
        .map_err(|e| CcuxError::UserError(format!("failed to write prompt: {}", e)))?;
    flush(output)?;

    let answer = read_answer(input)?.to_lowercase();
    Ok(match answer.as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}

/// Numbered menu; returns the chosen index. Accepts a number or an option name.
pub fn choose_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    options: &[&str],
    default: usize,
) -> Result<usize> {
    if options.is_empty() {
        return Err(CcuxError::UserError("nothing to choose from".to_string()));
    }
    let default = default.min(options.len() - 1);

    let write_err = |e: io::Error| CcuxError::UserError(format!("failed to write prompt: {}", e));
    writeln!(output, "{}", question.bold()).map_err(write_err)?;
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, option).map_err(write_err)?;
    }

    loop {
        write!(output, "Choice [{}]: ", default + 1).map_err(write_err)?;
        flush(output)?;
        let answer = read_answer(input)?;
        if answer.is_empty() {
            return Ok(default);
        }
        if let Ok(n) = answer.parse::<usize>()
            && (1..=options.len()).contains(&n)
        {
            return Ok(n - 1);
        }
        if let Some(i) = options.iter().position(|o| o.eq_ignore_ascii_case(&answer)) {
            return Ok(i);
        }
        writeln!(output, "Please enter a number between 1 and {}", options.len())
            .map_err(write_err)?;
    }
}

pub fn ask(question: &str, default: Option<&str>) -> Result<String> {
    ask_with(&mut io::stdin().lock(), &mut io::stdout(), question, default)
}

pub fn confirm(question: &str, default: bool) -> Result<bool> {
    confirm_with(&mut io::stdin().lock(), &mut io::stdout(), question, default)
}

pub fn choose(question: &str, options: &[&str], default: usize) -> Result<usize> {
    choose_with(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        question,
        options,
        default,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_uses_default_on_empty_answer() {
        let mut input = Cursor::new("\n");
        let mut out = Vec::new();
        let answer = ask_with(&mut input, &mut out, "Output dir", Some("output")).unwrap();
        assert_eq!(answer, "output");
    }

    #[test]
    fn ask_reasks_without_default() {
        let mut input = Cursor::new("\n  A todo app  \n");
        let mut out = Vec::new();
        let answer = ask_with(&mut input, &mut out, "Describe", None).unwrap();
        assert_eq!(answer, "A todo app");
    }

    #[test]
    fn ask_fails_on_eof() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let err = ask_with(&mut input, &mut out, "Describe", None).unwrap_err();
        assert!(err.to_string().contains("no input available"));
    }

    #[test]
    fn confirm_answers() {
        let mut out = Vec::new();
        assert!(confirm_with(&mut Cursor::new("yes\n"), &mut out, "Go?", false).unwrap());
        assert!(!confirm_with(&mut Cursor::new("n\n"), &mut out, "Go?", true).unwrap());
        assert!(confirm_with(&mut Cursor::new("\n"), &mut out, "Go?", true).unwrap());
    }

    #[test]
    fn choose_by_number_name_or_default() {
        let options = ["html", "react"];
        let mut out = Vec::new();
        assert_eq!(
            choose_with(&mut Cursor::new("2\n"), &mut out, "Framework", &options, 0).unwrap(),
            1
        );
        assert_eq!(
            choose_with(&mut Cursor::new("HTML\n"), &mut out, "Framework", &options, 1).unwrap(),
            0
        );
        assert_eq!(
            choose_with(&mut Cursor::new("9\n\n"), &mut out, "Framework", &options, 1).unwrap(),
            1
        );
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("between 1 and 2"));
    }
}
