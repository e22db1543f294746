//! Generator invocation: `<claude_cmd> --print <prompt>` with a spinner,
//! a timeout and per-call usage accounting.

use crate::config::Config;
use crate::error::{CcuxError, Result};
use crate::interrupt::CancelToken;
use crate::process;
use crate::ui::Spinner;
use crate::usage::{self, UsageStats};
use std::time::Duration;

const VERSION_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one successful generator call.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    /// Stdout lines joined with `\n`.
    pub text: String,
    pub usage: UsageStats,
    pub duration: Duration,
}

/// Runs prompts through the configured generator command.
pub struct Runner {
    command: Vec<String>,
    timeout: Duration,
    usage_cmd: Option<String>,
    token: CancelToken,
}

impl Runner {
    pub fn new(config: &Config, token: CancelToken) -> Result<Self> {
        Ok(Self {
            command: process::split_command(&config.claude_cmd)?,
            timeout: Duration::from_secs(config.timeout_seconds),
            usage_cmd: config.track_usage.then(|| config.usage_cmd.clone()),
            token,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn sample_usage(&self) -> Option<usage::UsageSample> {
        self.usage_cmd.as_deref().and_then(usage::sample)
    }

    /// Send `prompt` to the generator, showing `label` on a spinner.
    ///
    /// Fails with a generator error on spawn failure, timeout, or non-zero exit.
    pub fn run(&self, prompt: &str, label: &str) -> Result<RunOutput> {
        let pre = self.sample_usage();

        let mut args = self.command.clone();
        args.push("--print".to_string());
        args.push(prompt.to_string());

        tracing::info!(label, prompt_chars = prompt.len(), "calling generator");

        let spinner = Spinner::start(label);
        self.token.attach_spinner(spinner.handle());
        let result = process::execute(&args, self.timeout, &self.token);
        self.token.release_spinner();

        let captured = match result {
            Ok(captured) => captured,
            Err(e) => {
                spinner.finish_err(&format!("{} failed", label));
                return Err(e);
            }
        };

        if captured.timed_out {
            spinner.finish_err(&format!("{} timed out", label));
            return Err(CcuxError::GeneratorError(format!(
                "Claude Code timed out after {} seconds",
                self.timeout.as_secs()
            )));
        }

        if captured.exit_code != Some(0) {
            spinner.finish_err(&format!("{} failed", label));
            let stderr = captured.stderr_text();
            let detail = if stderr.trim().is_empty() {
                "Claude Code execution failed".to_string()
            } else {
                stderr
            };
            return Err(CcuxError::GeneratorError(format!(
                "Claude Code failed: {}",
                detail
            )));
        }

        spinner.finish_ok(&format!("{} ({:.1}s)", label, captured.duration.as_secs_f64()));

        let post = self.sample_usage();
        let usage = usage::difference(pre.as_ref(), post.as_ref());
        tracing::debug!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "generator call usage"
        );

        Ok(RunOutput {
            text: captured.stdout_text(),
            usage,
            duration: captured.duration,
        })
    }
}

fn run_version(claude_cmd: &str) -> Option<process::Captured> {
    let mut args = process::split_command(claude_cmd).ok()?;
    args.push("--version".to_string());
    process::execute(&args, VERSION_TIMEOUT, &CancelToken::new()).ok()
}

/// Whether `<claude_cmd> --version` succeeds.
pub fn validate_command(claude_cmd: &str) -> bool {
    run_version(claude_cmd).is_some_and(|c| c.is_success())
}

/// First stdout line of `<claude_cmd> --version`.
pub fn version(claude_cmd: &str) -> Option<String> {
    let captured = run_version(claude_cmd).filter(|c| c.is_success())?;
    captured.stdout.into_iter().find(|line| !line.is_empty())
}
