//! Diagnostics on stderr: errors, warnings and verbose/debug tracing.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`.
//! Errors are always shown; warnings are hidden by `--quiet`; verbose lines
//! need `-v` and debug lines `-vv`.

use std::error::Error as _;
use std::io::Write;

use crate::error::EcGuardError;

use super::{ColorMode, ansi};

#[derive(Debug, Clone, Copy)]
pub struct Logger {
    use_colors: bool,
    verbosity: u8,
    quiet: bool,
}

impl Logger {
    #[must_use]
    pub fn new(mode: ColorMode, verbosity: u8, quiet: bool) -> Self {
        Self {
            use_colors: mode.use_colors_stderr(),
            verbosity,
            quiet,
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool, verbosity: u8, quiet: bool) -> Self {
        Self {
            use_colors,
            verbosity,
            quiet,
        }
    }

    /// Print an error with its cause and suggestion, if any.
    pub fn error(&self, err: &EcGuardError) {
        self.write_error(&mut std::io::stderr().lock(), err);
    }

    pub fn warning(&self, message: &str) {
        self.write_warning(&mut std::io::stderr().lock(), message);
    }

    pub fn verbose(&self, message: &str) {
        self.write_trace(&mut std::io::stderr().lock(), 1, message);
    }

    pub fn debug(&self, message: &str) {
        self.write_trace(&mut std::io::stderr().lock(), 2, message);
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Writes an error to a writer (for testing).
    pub fn write_error<W: Write>(&self, w: &mut W, err: &EcGuardError) {
        let detail = err.source().map(ToString::to_string);
        self.write_error_parts(
            w,
            err.error_type(),
            &err.to_string(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    /// Writes an error from its parts.
    pub fn write_error_parts<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing sensible can be done when stderr itself fails.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_detail(w, detail, suggestion);
    }

    /// Writes a warning to a writer (for testing).
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
    }

    /// Writes a verbose (`level` 1) or debug (`level` 2) line.
    pub fn write_trace<W: Write>(&self, w: &mut W, level: u8, message: &str) {
        if self.quiet || self.verbosity < level {
            return;
        }
        let label = if level >= 2 { "debug" } else { "info" };
        if self.use_colors {
            let _ = writeln!(w, "{}{label}:{} {message}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "{label}: {message}");
        }
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(ColorMode::Auto, 0, false)
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
