use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Space,
    Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    Lf,
    Cr,
    Crlf,
}

impl EndOfLine {
    /// The line terminator this setting requires.
    #[must_use]
    pub const fn sequence(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Cr => "\r",
            Self::Crlf => "\r\n",
        }
    }
}

/// Formatting rules resolved for a single file.
///
/// `None` and `0` mean "unset": the corresponding rule is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorSettings {
    pub indent_style: Option<IndentStyle>,
    pub indent_size: usize,
    pub end_of_line: Option<EndOfLine>,
    pub insert_final_newline: Option<bool>,
    pub trim_trailing_whitespace: bool,
    pub max_line_length: usize,
    pub charset: Option<String>,
}

/// Nearest-match lookup of the editor settings that apply to a path.
pub trait SettingsLookup: Send + Sync {
    /// Resolve the settings for `path`.
    ///
    /// # Errors
    /// Returns an error if a settings source exists but cannot be read or parsed.
    fn settings_for(&self, path: &Path) -> Result<EditorSettings>;
}

/// A lookup that returns the same settings for every path.
#[derive(Debug, Clone, Default)]
pub struct FixedSettings(pub EditorSettings);

impl SettingsLookup for FixedSettings {
    fn settings_for(&self, _path: &Path) -> Result<EditorSettings> {
        Ok(self.0.clone())
    }
}
