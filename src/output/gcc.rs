use std::fmt::Write;

use crate::error::Result;
use crate::validation::{FileReport, consolidate};

use super::{ReportFormatter, display_path};

/// `path:line:0: error: message`, the format understood by editors and CI
/// problem matchers. Consolidated runs are expanded back to one line each;
/// file-scope errors use line 0.
pub struct GccFormatter;

impl ReportFormatter for GccFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            let path = display_path(&report.path);
            for error in consolidate(&report.errors) {
                let start = error.display_line().unwrap_or(0);
                let end = error.display_end_line().unwrap_or(0);
                for line in start..=end {
                    writeln!(output, "{path}:{line}:0: error: {}", error.message).ok();
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "gcc_tests.rs"]
mod tests;
