use std::fmt::Write;

use crate::error::Result;
use crate::validation::{FileReport, ValidationError, consolidate};

use super::{ColorMode, ReportFormatter, ansi, display_path};

/// The default, human-readable report.
///
/// ```text
/// src/main.c:
///     line 4: trailing whitespace
///     line 7-9: wrong indentation type (spaces instead of tabs)
///     final newline expected
///
/// Summary: 12 files checked, 5 errors in 1 file
/// ```
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_stdout(),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn location(error: &ValidationError) -> Option<String> {
        let start = error.display_line()?;
        let end = error.display_end_line().unwrap_or(start);
        Some(if end > start {
            format!("line {start}-{end}")
        } else {
            format!("line {start}")
        })
    }

    fn format_report(&self, report: &FileReport, output: &mut String) {
        let path = display_path(&report.path);
        writeln!(output, "{}:", self.colorize(&path, ansi::YELLOW)).ok();

        for error in consolidate(&report.errors) {
            match Self::location(&error) {
                Some(location) => writeln!(output, "\t{location}: {}", error.message).ok(),
                None => writeln!(output, "\t{}", error.message).ok(),
            };
        }
    }

    fn format_summary(&self, reports: &[FileReport]) -> String {
        let total = reports.len();
        let errors: usize = reports.iter().map(FileReport::error_count).sum();
        let failed = reports.iter().filter(|r| !r.is_clean()).count();

        let files = |n: usize| if n == 1 { "file" } else { "files" };
        let color = if errors == 0 { ansi::GREEN } else { ansi::RED };
        let errors_str = self.colorize(
            &format!("{errors} {}", if errors == 1 { "error" } else { "errors" }),
            color,
        );

        format!(
            "Summary: {total} {} checked, {errors_str} in {failed} {}",
            files(total),
            files(failed)
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports.iter().filter(|r| !r.is_clean()) {
            self.format_report(report, &mut output);
            output.push('\n');
        }

        output.push_str(&self.format_summary(reports));
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
