//! Spinner display for long-running external tools

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while an external tool runs
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a spinner with a message
    pub fn new(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        Self { pb }
    }

    /// Stop the spinner, leaving no line behind
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error, leaving no line behind
    pub fn abandon(self) {
        self.pb.finish_and_clear();
    }
}
