use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Elapsed-time spinner shown while the generator runs.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Handle for cancellation; clones share the same bar.
    pub fn handle(&self) -> ProgressBar {
        self.bar.clone()
    }

    pub fn finish_ok(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    pub fn finish_err(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}
