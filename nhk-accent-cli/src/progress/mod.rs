//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for word list annotation
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for `total_rows` rows across all files
    pub fn init_rows(&mut self, total_rows: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_rows);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Announce the file being annotated
    pub fn start_file(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Annotating: {filename}"));
        }
    }

    /// Update progress for a completed row
    pub fn row_completed(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
