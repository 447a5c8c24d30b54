//! The validation engine: rule evaluators, the per-file validator and the
//! batch driver.

mod driver;
mod file;
pub mod rules;
mod settings;

pub use driver::{FileReport, process_validation, process_validation_parallel};
pub use file::{
    DISABLE_END_MARKER, DISABLE_FILE_MARKER, DISABLE_LINE_MARKER, DISABLE_START_MARKER,
    FileValidator, ValidationFailure, validate_content,
};
pub use rules::Violation;
pub use settings::{EditorSettings, EndOfLine, FixedSettings, IndentStyle, SettingsLookup};

use serde::{Deserialize, Serialize};

/// Checks switched off globally, regardless of `.editorconfig` settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisabledChecks {
    pub trim_trailing_whitespace: bool,
    pub end_of_line: bool,
    pub insert_final_newline: bool,
    pub indentation: bool,
    pub indent_size: bool,
    pub max_line_length: bool,
}

/// Run-wide validation options, built once from the tool configuration and
/// shared read-only by every file validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    pub disabled: DisabledChecks,
    /// Accept spaces after the leading tabs of tab-indented lines.
    pub spaces_after_tabs: bool,
    /// Line length limit used when `.editorconfig` sets none (0 = none).
    pub max_line_length: usize,
    /// Charset that replaces the `.editorconfig` charset when counting line length.
    pub charset: Option<String>,
}

impl CheckConfig {
    /// Apply run-wide defaults and overrides to the settings of one file.
    #[must_use]
    pub fn effective_settings(&self, mut settings: EditorSettings) -> EditorSettings {
        if settings.max_line_length == 0 {
            settings.max_line_length = self.max_line_length;
        }
        if let Some(charset) = &self.charset {
            settings.charset = Some(charset.clone());
        }
        settings
    }
}

/// Which check produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    InsertFinalNewline,
    EndOfLine,
    TrimTrailingWhitespace,
    IndentStyle,
    IndentSize,
    MaxLineLength,
    /// The file could not be read or decoded.
    File,
}

impl Check {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InsertFinalNewline => "insert_final_newline",
            Self::EndOfLine => "end_of_line",
            Self::TrimTrailingWhitespace => "trim_trailing_whitespace",
            Self::IndentStyle => "indent_style",
            Self::IndentSize => "indent_size",
            Self::MaxLineLength => "max_line_length",
            Self::File => "file",
        }
    }
}

/// One error found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// 0-based line index; `None` for errors that concern the whole file.
    pub line: Option<usize>,
    pub check: Check,
    pub message: String,
    /// Number of directly following lines that had the same error
    /// (set by [`consolidate`]).
    pub additional_identical: usize,
}

impl ValidationError {
    #[must_use]
    pub fn from_violation(line: Option<usize>, violation: &Violation) -> Self {
        Self {
            line,
            check: violation.check(),
            message: violation.to_string(),
            additional_identical: 0,
        }
    }

    #[must_use]
    pub fn from_failure(failure: &ValidationFailure) -> Self {
        Self {
            line: None,
            check: Check::File,
            message: failure.to_string(),
            additional_identical: 0,
        }
    }

    /// 1-based first line, as shown to users.
    #[must_use]
    pub fn display_line(&self) -> Option<usize> {
        self.line.map(|l| l + 1)
    }

    /// 1-based last line covered after consolidation.
    #[must_use]
    pub fn display_end_line(&self) -> Option<usize> {
        self.line.map(|l| l + 1 + self.additional_identical)
    }
}

/// Merge errors with the same message on consecutive lines into a single
/// record. File-scope errors are never merged. The order of first
/// occurrence is kept.
#[must_use]
pub fn consolidate(errors: &[ValidationError]) -> Vec<ValidationError> {
    let mut merged: Vec<ValidationError> = Vec::with_capacity(errors.len());

    for error in errors {
        let Some(line) = error.line else {
            merged.push(error.clone());
            continue;
        };

        let previous = merged.iter_mut().rev().find(|m| {
            m.message == error.message
                && m.line
                    .is_some_and(|start| start + m.additional_identical + 1 == line)
        });

        match previous {
            Some(run) => run.additional_identical += 1 + error.additional_identical,
            None => merged.push(error.clone()),
        }
    }

    merged
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
