mod codeclimate;
mod gcc;
mod github;
mod log;
mod path;
mod progress;
mod text;

pub use codeclimate::CodeClimateFormatter;
pub use gcc::GccFormatter;
pub use github::GithubActionsFormatter;
pub use log::Logger;
pub use path::display_path;
pub use progress::CheckProgress;
pub use text::TextFormatter;

use std::fmt;
use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::FileReport;

/// Trait for rendering validation reports into an output format.
pub trait ReportFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode for stdout.
    #[must_use]
    pub fn use_colors_stdout(self) -> bool {
        self.resolve(|| std::io::stdout().is_terminal())
    }

    /// Resolve the mode for stderr.
    #[must_use]
    pub fn use_colors_stderr(self) -> bool {
        self.resolve(|| std::io::stderr().is_terminal())
    }

    fn resolve(self, is_terminal: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Presence of NO_COLOR (any value) disables color: https://no-color.org
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal(),
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable report grouped by file.
    #[default]
    Default,
    /// `file:line:column: error: message`, one line per error.
    Gcc,
    /// GitHub Actions workflow commands.
    GithubActions,
    /// Code Climate JSON, as consumed by GitLab code quality.
    Codeclimate,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Gcc => "gcc",
            Self::GithubActions => "github-actions",
            Self::Codeclimate => "codeclimate",
        }
    }

    /// The formatter that renders this format.
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn ReportFormatter> {
        match self {
            Self::Default => Box::new(TextFormatter::new(color)),
            Self::Gcc => Box::new(GccFormatter),
            Self::GithubActions => Box::new(GithubActionsFormatter),
            Self::Codeclimate => Box::new(CodeClimateFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "text" => Ok(Self::Default),
            "gcc" => Ok(Self::Gcc),
            "github-actions" | "github" => Ok(Self::GithubActions),
            "codeclimate" => Ok(Self::Codeclimate),
            _ => Err(format!(
                "Unknown output format: {s} (expected default, gcc, github-actions or codeclimate)"
            )),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
