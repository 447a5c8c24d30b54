use std::fmt::Write;

use crate::error::Result;
use crate::validation::{FileReport, consolidate};

use super::{ReportFormatter, display_path};

/// GitHub Actions `::error` workflow commands, shown as annotations on the
/// pull request diff.
pub struct GithubActionsFormatter;

/// Workflow command data must not contain raw `%`, CR or LF.
fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Property values additionally escape `:` and `,`.
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

impl ReportFormatter for GithubActionsFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            let file = escape_property(&display_path(&report.path));
            for error in consolidate(&report.errors) {
                let message = escape_data(&error.message);
                match (error.display_line(), error.display_end_line()) {
                    (Some(line), Some(end)) if end > line => writeln!(
                        output,
                        "::error file={file},line={line},endLine={end}::{message}"
                    ),
                    (Some(line), _) => {
                        writeln!(output, "::error file={file},line={line}::{message}")
                    }
                    (None, _) => writeln!(output, "::error file={file}::{message}"),
                }
                .ok();
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
