//! Stateless rule evaluators.
//!
//! Each evaluator inspects a single line or the whole decoded content and
//! returns `Ok(())` or the [`Violation`] it found. Fixed patterns are compiled
//! once; indent-size patterns are compiled on first use and cached by size.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use regex::Regex;
use thiserror::Error;

use super::{Check, CheckConfig, EndOfLine, IndentStyle};

/// Continuation line of a block comment: ` * text`, ` *` or ` */`.
const BLOCK_COMMENT: &str = r" \*([ \t/]|$)";

static SPACE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *([^ \t]|$)").expect("valid space indent regex"));

static TAB_INDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\t*([^ \t]|$|{BLOCK_COMMENT})")).expect("valid tab indent regex")
});

static TAB_INDENT_SPACES_AFTER_TABS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\t* ?|\t+ +)([^ \t]|$)").expect("valid tab indent regex")
});

static INDENT_SIZE_PATTERNS: LazyLock<RwLock<HashMap<usize, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// A broken formatting rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("wrong indent style (tabs instead of spaces)")]
    TabsInsteadOfSpaces,

    #[error("wrong amount of left-padding spaces (want multiple of {size})")]
    IndentSize { size: usize },

    #[error("wrong indentation type (spaces instead of tabs)")]
    SpacesInsteadOfTabs,

    #[error("trailing whitespace")]
    TrailingWhitespace,

    #[error("wrong line endings or no final newline")]
    WrongFinalNewline,

    #[error("no final newline expected")]
    UnexpectedFinalNewline,

    #[error("final newline expected")]
    MissingFinalNewline,

    #[error("not all lines have the correct end of line character")]
    MixedLineEndings,

    #[error("line too long ({length} instead of {max})")]
    LineTooLong { length: usize, max: usize },
}

impl Violation {
    #[must_use]
    pub const fn check(&self) -> Check {
        match self {
            Self::TabsInsteadOfSpaces | Self::SpacesInsteadOfTabs => Check::IndentStyle,
            Self::IndentSize { .. } => Check::IndentSize,
            Self::TrailingWhitespace => Check::TrimTrailingWhitespace,
            Self::WrongFinalNewline | Self::UnexpectedFinalNewline | Self::MissingFinalNewline => {
                Check::InsertFinalNewline
            }
            Self::MixedLineEndings => Check::EndOfLine,
            Self::LineTooLong { .. } => Check::MaxLineLength,
        }
    }
}

pub type RuleResult = Result<(), Violation>;

/// Check a line's indentation against the declared style. Unset style passes.
///
/// # Errors
/// Returns the indentation [`Violation`] found on the line.
pub fn indentation(
    line: &str,
    style: Option<IndentStyle>,
    size: usize,
    config: &CheckConfig,
) -> RuleResult {
    match style {
        Some(IndentStyle::Space) => space(line, size, config),
        Some(IndentStyle::Tab) => tab(line, config),
        None => Ok(()),
    }
}

/// Space indentation: no tabs in the indent, and, when `size > 0` and the
/// size check is enabled, a multiple of `size` spaces.
///
/// # Errors
/// Returns [`Violation::TabsInsteadOfSpaces`] or [`Violation::IndentSize`].
pub fn space(line: &str, size: usize, config: &CheckConfig) -> RuleResult {
    if line.is_empty() {
        return Ok(());
    }

    if !SPACE_INDENT.is_match(line) {
        return Err(Violation::TabsInsteadOfSpaces);
    }

    if config.disabled.indent_size || size == 0 {
        return Ok(());
    }

    match indent_size_pattern(size) {
        Some(pattern) if !pattern.is_match(line) => Err(Violation::IndentSize { size }),
        _ => Ok(()),
    }
}

/// Tab indentation: only tabs before content, unless spaces after tabs are
/// allowed by the configuration.
///
/// # Errors
/// Returns [`Violation::SpacesInsteadOfTabs`].
pub fn tab(line: &str, config: &CheckConfig) -> RuleResult {
    if line.is_empty() {
        return Ok(());
    }

    let matched = TAB_INDENT.is_match(line)
        || (config.spaces_after_tabs && TAB_INDENT_SPACES_AFTER_TABS.is_match(line));

    if matched {
        Ok(())
    } else {
        Err(Violation::SpacesInsteadOfTabs)
    }
}

fn indent_size_pattern(size: usize) -> Option<Regex> {
    if let Ok(cache) = INDENT_SIZE_PATTERNS.read()
        && let Some(pattern) = cache.get(&size)
    {
        return Some(pattern.clone());
    }

    let pattern = Regex::new(&format!(r"^( {{{size}}})*([^ \t]|$|{BLOCK_COMMENT})")).ok()?;
    if let Ok(mut cache) = INDENT_SIZE_PATTERNS.write() {
        cache.insert(size, pattern.clone());
    }
    Some(pattern)
}

/// # Errors
/// Returns [`Violation::TrailingWhitespace`] if enabled and the line ends
/// with a space or tab.
pub fn trailing_whitespace(line: &str, enabled: bool) -> RuleResult {
    if enabled && line.ends_with([' ', '\t']) {
        Err(Violation::TrailingWhitespace)
    } else {
        Ok(())
    }
}

/// Check how the content ends.
///
/// With both settings declared and `insert_final_newline = true`, the content
/// must end with exactly the declared terminator. Otherwise only the presence
/// of any newline is compared with `insert_final_newline`.
///
/// # Errors
/// Returns one of the final newline violations.
pub fn final_newline(
    content: &str,
    insert_final_newline: Option<bool>,
    end_of_line: Option<EndOfLine>,
) -> RuleResult {
    if let (Some(true), Some(eol)) = (insert_final_newline, end_of_line) {
        let ends_with_expected = content.ends_with(eol.sequence());
        let crlf_for_lf = eol == EndOfLine::Lf && content.ends_with("\r\n");
        return if ends_with_expected && !crlf_for_lf {
            Ok(())
        } else {
            Err(Violation::WrongFinalNewline)
        };
    }

    let has_final_newline = content.ends_with(['\n', '\r']);
    match insert_final_newline {
        Some(false) if has_final_newline => Err(Violation::UnexpectedFinalNewline),
        Some(true) if !has_final_newline => Err(Violation::MissingFinalNewline),
        _ => Ok(()),
    }
}

/// Check that every line terminator matches `end_of_line`.
///
/// The content is split by LF, by CR and by CRLF. Every CRLF also counts as
/// one LF and one CR, so the three piece counts agree only for pure CRLF
/// content. Any CR rejects `lf` and any LF rejects `cr`.
///
/// # Errors
/// Returns [`Violation::MixedLineEndings`].
pub fn line_ending(content: &str, end_of_line: Option<EndOfLine>) -> RuleResult {
    let Some(eol) = end_of_line else {
        return Ok(());
    };

    let by_lf = content.split('\n').count();
    let by_cr = content.split('\r').count();
    let by_crlf = content.split("\r\n").count();

    let valid = match eol {
        EndOfLine::Lf => by_cr == 1 && by_crlf == 1,
        EndOfLine::Cr => by_lf == 1 && by_crlf == 1,
        EndOfLine::Crlf => by_crlf == by_lf && by_lf == by_cr,
    };

    if valid {
        Ok(())
    } else {
        Err(Violation::MixedLineEndings)
    }
}

/// Check a line against `max_length` (0 = unlimited).
///
/// UTF-8 lines are measured in code points, ignoring a leading byte order
/// mark; every other charset is measured in bytes.
///
/// # Errors
/// Returns [`Violation::LineTooLong`].
pub fn max_line_length(line: &str, max_length: usize, charset: Option<&str>) -> RuleResult {
    if max_length == 0 {
        return Ok(());
    }

    let length = if is_utf8_charset(charset) {
        line.strip_prefix('\u{feff}').unwrap_or(line).chars().count()
    } else {
        line.len()
    };

    if length > max_length {
        Err(Violation::LineTooLong {
            length,
            max: max_length,
        })
    } else {
        Ok(())
    }
}

fn is_utf8_charset(charset: Option<&str>) -> bool {
    charset.is_some_and(|c| c.eq_ignore_ascii_case("utf-8") || c.eq_ignore_ascii_case("utf-8-bom"))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
