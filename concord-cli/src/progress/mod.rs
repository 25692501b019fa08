//! Progress reporting module

use concord_core::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for document processing
///
/// Wraps an indicatif bar behind the core's [`ProgressSink`] observer; in
/// quiet mode every notification is a no-op. The bar writes to stderr, so
/// extraction output on stdout stays clean.
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

    /// Initialize the progress bar for a known document count
    pub fn init_documents(&mut self, total_documents: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_documents);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Finish progress reporting with the extracted match total
    pub fn finish(&self, total_matches: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{total_matches} matches"));
        }
    }
}

impl ProgressSink for ProgressReporter {
    fn on_document(&self, processed: usize, _total: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(processed as u64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_documents(10);
        reporter.on_document(1, 10);
        reporter.finish(0);
    }

    #[test]
    fn test_reporter_tracks_position() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(3);
        reporter.on_document(1, 3);
        reporter.on_document(2, 3);
        reporter.finish(5);
    }
}
