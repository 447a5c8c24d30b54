use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::encoding::{DecodeError, decode_bytes};
use crate::error::EcGuardError;

use super::rules;
use super::{CheckConfig, EditorSettings, SettingsLookup, ValidationError};

/// Anywhere on the first line: skip the whole file.
pub const DISABLE_FILE_MARKER: &str = "ec-guard:disable-file";
/// Skip all line checks on the line containing the marker.
pub const DISABLE_LINE_MARKER: &str = "ec-guard:disable-line";
/// Skip line checks on the lines after this marker ...
pub const DISABLE_START_MARKER: &str = "ec-guard:disable-start";
/// ... up to the line containing this marker.
pub const DISABLE_END_MARKER: &str = "ec-guard:disable-end";

/// Why a file could not be validated at all.
#[derive(Error, Debug)]
pub enum ValidationFailure {
    #[error("failed to read file: {source}")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("failed to decode file: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to resolve editor settings: {0}")]
    Settings(#[source] Box<EcGuardError>),
}

/// Validates single files against their resolved editor settings.
pub struct FileValidator<'a> {
    config: &'a CheckConfig,
    lookup: &'a dyn SettingsLookup,
}

impl<'a> FileValidator<'a> {
    #[must_use]
    pub const fn new(config: &'a CheckConfig, lookup: &'a dyn SettingsLookup) -> Self {
        Self { config, lookup }
    }

    /// Read and validate the file at `path`.
    ///
    /// Binary files and files opted out with [`DISABLE_FILE_MARKER`] yield no
    /// errors.
    ///
    /// # Errors
    /// Returns a [`ValidationFailure`] if the file cannot be read, decoded,
    /// or its settings cannot be resolved.
    pub fn validate_file(&self, path: &Path) -> Result<Vec<ValidationError>, ValidationFailure> {
        let bytes = fs::read(path).map_err(|source| ValidationFailure::Read { source })?;
        self.validate_bytes(path, &bytes)
    }

    /// Validate already-read file contents as if they were stored at `path`.
    ///
    /// # Errors
    /// Returns a [`ValidationFailure`] if the bytes cannot be decoded or the
    /// settings for `path` cannot be resolved.
    pub fn validate_bytes(
        &self,
        path: &Path,
        bytes: &[u8],
    ) -> Result<Vec<ValidationError>, ValidationFailure> {
        if is_disabled_file(bytes) {
            return Ok(Vec::new());
        }

        let decoded = decode_bytes(bytes)?;
        if decoded.is_binary() || is_disabled_file(decoded.text.as_bytes()) {
            return Ok(Vec::new());
        }

        let settings = self
            .lookup
            .settings_for(path)
            .map_err(|e| ValidationFailure::Settings(Box::new(e)))?;
        let settings = self.config.effective_settings(settings);

        Ok(validate_content(&decoded.text, &settings, self.config))
    }
}

/// Marker search on the first line. Works on raw bytes so that files that
/// fail to decode can still opt out.
fn is_disabled_file(bytes: &[u8]) -> bool {
    let end = bytes
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .unwrap_or(bytes.len());
    let marker = DISABLE_FILE_MARKER.as_bytes();
    bytes[..end].windows(marker.len()).any(|w| w == marker)
}

/// Validate decoded file content.
///
/// Errors come out in a fixed order: final newline, line endings, then line
/// errors by ascending line, with trailing whitespace before indentation
/// before line length on the same line.
#[must_use]
pub fn validate_content(
    content: &str,
    settings: &EditorSettings,
    config: &CheckConfig,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let disabled = &config.disabled;

    if !content.is_empty() {
        if !disabled.insert_final_newline
            && let Err(v) = rules::final_newline(
                content,
                settings.insert_final_newline,
                settings.end_of_line,
            )
        {
            errors.push(ValidationError::from_violation(None, &v));
        }

        if !disabled.end_of_line
            && let Err(v) = rules::line_ending(content, settings.end_of_line)
        {
            errors.push(ValidationError::from_violation(None, &v));
        }
    }

    let mut in_disabled_block = false;
    for (index, line) in split_lines(content).enumerate() {
        if in_disabled_block {
            if !line.contains(DISABLE_END_MARKER) {
                continue;
            }
            in_disabled_block = false;
        } else if line.contains(DISABLE_START_MARKER) {
            in_disabled_block = true;
        }

        if line.contains(DISABLE_LINE_MARKER) {
            continue;
        }

        check_line(line, index, settings, config, &mut errors);
    }

    errors
}

fn check_line(
    line: &str,
    index: usize,
    settings: &EditorSettings,
    config: &CheckConfig,
    errors: &mut Vec<ValidationError>,
) {
    let disabled = &config.disabled;
    let mut record = |result: rules::RuleResult| {
        if let Err(v) = result {
            errors.push(ValidationError::from_violation(Some(index), &v));
        }
    };

    if !disabled.trim_trailing_whitespace {
        record(rules::trailing_whitespace(
            line,
            settings.trim_trailing_whitespace,
        ));
    }

    if !disabled.indentation {
        record(rules::indentation(
            line,
            settings.indent_style,
            settings.indent_size,
            config,
        ));
    }

    if !disabled.max_line_length {
        record(rules::max_line_length(
            line,
            settings.max_line_length,
            settings.charset.as_deref(),
        ));
    }
}

/// Split on `\r\n`, `\n` or `\r`, without the terminators. A trailing
/// terminator does not start an extra empty line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &rest[..pos];
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
