//! Child process execution with captured output and a wall-clock timeout.

use crate::error::{CcuxError, Result};
use crate::interrupt::CancelToken;
use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const READER_GRACE: Duration = Duration::from_secs(2);

/// Output of a finished (or killed) child process.
#[derive(Debug, Clone, Default)]
pub struct Captured {
    /// Exit code (None if killed or terminated by a signal).
    pub exit_code: Option<i32>,
    /// Trimmed stdout lines, blank lines kept.
    pub stdout: Vec<String>,
    /// Trimmed stderr lines.
    pub stderr: Vec<String>,
    pub duration: Duration,
    /// Whether the process was killed on timeout.
    pub timed_out: bool,
}

impl Captured {
    pub fn is_success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }

    pub fn stdout_text(&self) -> String {
        self.stdout.join("\n")
    }

    pub fn stderr_text(&self) -> String {
        self.stderr.join("\n")
    }
}

/// Split a configured command line into program and arguments.
pub fn split_command(command: &str) -> Result<Vec<String>> {
    let args = shell_words::split(command).map_err(|e| {
        CcuxError::UserError(format!(
            "failed to parse command '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            command, e
        ))
    })?;

    if args.is_empty() {
        return Err(CcuxError::UserError(format!(
            "command is empty after parsing: '{}'",
            command
        )));
    }
    Ok(args)
}

type Lines = Arc<Mutex<Vec<String>>>;

fn spawn_reader<R: Read + Send + 'static>(stream: R, lines: Lines) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for line in BufReader::new(stream).lines() {
            let Ok(line) = line else { break };
            lines
                .lock()
                .unwrap_or_else(|poison| poison.into_inner())
                .push(line.trim().to_string());
        }
    })
}

/// Join reader threads, leaving behind any that do not finish within the grace period.
fn join_readers(handles: Vec<JoinHandle<()>>) {
    let deadline = Instant::now() + READER_GRACE;
    for handle in handles {
        while !handle.is_finished() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        if handle.is_finished() {
            let _ = handle.join();
        } else {
            tracing::debug!("output reader still busy after grace period, detaching");
        }
    }
}

fn take_lines(lines: &Lines) -> Vec<String> {
    std::mem::take(&mut *lines.lock().unwrap_or_else(|poison| poison.into_inner()))
}

/// Run `args` to completion or until `timeout`, capturing both streams.
///
/// The child is registered with `token` while it runs so an interrupt can
/// kill it. A spawn failure is a generator error with a `Fix:` hint.
pub fn execute(args: &[String], timeout: Duration, token: &CancelToken) -> Result<Captured> {
    let Some((program, rest)) = args.split_first() else {
        return Err(CcuxError::UserError("command is empty".to_string()));
    };

    tracing::debug!(program = %program, args = rest.len(), timeout_secs = timeout.as_secs(), "spawning process");

    let start = Instant::now();
    let mut child = Command::new(program)
        .args(rest)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            CcuxError::GeneratorError(format!(
                "failed to execute '{}': {}\n\
                 Fix: ensure the command is installed and in PATH, or set CCUX_CLAUDE_CMD.",
                program, e
            ))
        })?;

    let stdout_lines: Lines = Arc::default();
    let stderr_lines: Lines = Arc::default();
    let mut readers = Vec::new();
    if let Some(stdout) = child.stdout.take() {
        readers.push(spawn_reader(stdout, Arc::clone(&stdout_lines)));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(spawn_reader(stderr, Arc::clone(&stderr_lines)));
    }

    token.attach_child(child);
    let waited = wait_with_timeout(token, timeout);
    token.release_child();
    let (exit_code, timed_out) = waited?;

    join_readers(readers);

    let captured = Captured {
        exit_code,
        stdout: take_lines(&stdout_lines),
        stderr: take_lines(&stderr_lines),
        duration: start.elapsed(),
        timed_out,
    };
    tracing::debug!(
        exit_code = ?captured.exit_code,
        timed_out,
        stdout_lines = captured.stdout.len(),
        elapsed_ms = captured.duration.as_millis() as u64,
        "process finished"
    );
    Ok(captured)
}

/// Poll the registered child until it exits or `timeout` passes.
///
/// Returns (exit_code, timed_out).
fn wait_with_timeout(token: &CancelToken, timeout: Duration) -> Result<(Option<i32>, bool)> {
    let start = Instant::now();

    loop {
        match token.try_wait_child() {
            Ok(Some(status)) => return Ok((status.code(), false)),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    token.kill_child();
                    return Ok((None, true));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                return Err(CcuxError::GeneratorError(format!(
                    "failed to check process status: {}",
                    e
                )));
            }
        }
    }
}
