use std::io::IsTerminal;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} Checking [{bar:40.cyan/blue}] {pos}/{len} files ({eta})";

/// Progress bar on stderr while files are validated.
///
/// Hidden in quiet mode, when stderr is not a terminal, and for tiny runs
/// where it would only flicker.
pub struct CheckProgress {
    bar: ProgressBar,
    done: AtomicU64,
}

impl CheckProgress {
    /// Runs shorter than this many files get no visible bar.
    pub const MIN_VISIBLE_FILES: usize = 32;

    #[must_use]
    pub fn new(files: usize, quiet: bool) -> Self {
        let visible =
            !quiet && files >= Self::MIN_VISIBLE_FILES && std::io::stderr().is_terminal();
        Self::with_visibility(files, visible)
    }

    fn with_visibility(files: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(files as u64);
            // The template is a constant; a bad one only loses styling.
            if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
                bar.set_style(style.progress_chars("█▓░"));
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            done: AtomicU64::new(0),
        }
    }

    /// Record one finished file. Safe to call from rayon workers.
    pub fn inc(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.set_position(done);
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    /// Clear the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
