use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over a known number of steps
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Create a visible bar with `total` steps and an initial message
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(description.to_string());

        ProgressTracker { bar }
    }

    /// A tracker that draws nothing, for library callers and tests
    pub fn hidden() -> Self {
        ProgressTracker { bar: ProgressBar::hidden() }
    }

    /// Advance by `amount` steps
    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    /// Mark the bar as done
    pub fn finish(&self) {
        self.bar.finish_with_message("Completed");
    }

    /// Replace the message shown next to the bar
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }
}
