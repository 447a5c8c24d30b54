use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::validation::{FileReport, ValidationError, consolidate};

use super::{ReportFormatter, display_path};

/// Code Climate issues as a JSON array (the GitLab code quality subset).
pub struct CodeClimateFormatter;

#[derive(Debug, Serialize)]
struct Issue {
    check_name: &'static str,
    description: String,
    fingerprint: String,
    severity: &'static str,
    location: Location,
}

#[derive(Debug, Serialize)]
struct Location {
    path: String,
    lines: Lines,
}

#[derive(Debug, Serialize)]
struct Lines {
    begin: usize,
    end: usize,
}

/// Stable issue identity: SHA-256 of `path:line:repeat_count:message`.
fn fingerprint(path: &str, error: &ValidationError) -> String {
    let line = error.display_line().unwrap_or(0);
    let mut hasher = Sha256::new();
    hasher.update(
        format!(
            "{path}:{line}:{}:{}",
            error.additional_identical, error.message
        )
        .as_bytes(),
    );
    format!("{:x}", hasher.finalize())
}

fn issue(path: &str, error: &ValidationError) -> Issue {
    Issue {
        check_name: error.check.name(),
        description: error.message.clone(),
        fingerprint: fingerprint(path, error),
        severity: "minor",
        location: Location {
            path: path.to_string(),
            lines: Lines {
                begin: error.display_line().unwrap_or(1),
                end: error.display_end_line().unwrap_or(1),
            },
        },
    }
}

impl ReportFormatter for CodeClimateFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let issues: Vec<Issue> = reports
            .iter()
            .flat_map(|report| {
                let path = display_path(&report.path);
                consolidate(&report.errors)
                    .iter()
                    .map(|error| issue(&path, error))
                    .collect::<Vec<_>>()
            })
            .collect();

        let mut json = serde_json::to_string_pretty(&issues)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "codeclimate_tests.rs"]
mod tests;
