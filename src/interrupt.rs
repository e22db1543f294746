//! Ctrl-C handling.
//!
//! The active generator process and spinner live in a [`CancelToken`]
//! instead of process-wide globals. The runner registers them for the
//! duration of each call; the interrupt handler holds a clone and tears them
//! down before exiting.

use crate::exit_codes;
use colored::Colorize;
use indicatif::ProgressBar;
use std::io;
use std::process::{Child, ExitStatus};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Slots {
    child: Mutex<Option<Child>>,
    spinner: Mutex<Option<ProgressBar>>,
}

/// Shared handle to the resources an interrupt must clean up.
#[derive(Clone, Default)]
pub struct CancelToken {
    slots: Arc<Slots>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poison| poison.into_inner())
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a running child until [`release_child`](Self::release_child).
    pub fn attach_child(&self, child: Child) {
        *lock(&self.slots.child) = Some(child);
    }

    /// Poll the registered child without blocking.
    pub fn try_wait_child(&self) -> io::Result<Option<ExitStatus>> {
        match lock(&self.slots.child).as_mut() {
            Some(child) => child.try_wait(),
            None => Err(io::Error::other("no child process registered")),
        }
    }

    /// Kill the registered child and reap it. No-op when nothing is registered.
    pub fn kill_child(&self) {
        if let Some(child) = lock(&self.slots.child).as_mut() {
            // SIGKILL on Unix, TerminateProcess on Windows.
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    pub fn release_child(&self) -> Option<Child> {
        lock(&self.slots.child).take()
    }

    #[cfg(test)]
    pub fn has_child(&self) -> bool {
        lock(&self.slots.child).is_some()
    }

    pub fn attach_spinner(&self, bar: ProgressBar) {
        *lock(&self.slots.spinner) = Some(bar);
    }

    pub fn release_spinner(&self) {
        lock(&self.slots.spinner).take();
    }

    /// Kill the child and stop the spinner.
    pub fn cancel(&self) {
        self.kill_child();
        self.release_child();
        if let Some(bar) = lock(&self.slots.spinner).take() {
            bar.abandon();
        }
    }
}

/// Install the Ctrl-C handler. Call once from `main`.
pub fn install(token: CancelToken) -> anyhow::Result<()> {
    ctrlc::set_handler(move || {
        eprintln!("\n{}", "Interrupt received, cleaning up...".yellow());
        token.cancel();
        eprintln!("{}", "Operation cancelled by user".red());
        std::process::exit(exit_codes::USER_ERROR);
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::{Command, Stdio};

    #[test]
    fn empty_token_has_nothing_to_poll() {
        let token = CancelToken::new();
        assert!(!token.has_child());
        assert!(token.try_wait_child().is_err());
        token.cancel();
        assert!(token.release_child().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn cancel_kills_registered_child() {
        let child = Command::new("sleep")
            .arg("30")
            .stdout(Stdio::null())
            .spawn()
            .unwrap();
        let token = CancelToken::new();
        let handler_view = token.clone();
        token.attach_child(child);
        assert!(token.try_wait_child().unwrap().is_none());

        handler_view.cancel();
        assert!(!token.has_child());
    }

    #[cfg(unix)]
    #[test]
    fn kill_leaves_child_registered_for_reaping() {
        let child = Command::new("sleep").arg("30").spawn().unwrap();
        let token = CancelToken::new();
        token.attach_child(child);
        token.kill_child();
        let status = token.try_wait_child().unwrap();
        assert!(status.is_some_and(|s| !s.success()));
        assert!(token.release_child().is_some());
    }

    #[test]
    fn spinner_slot_is_cleared() {
        let token = CancelToken::new();
        token.attach_spinner(ProgressBar::hidden());
        token.release_spinner();
        token.cancel();
    }
}
