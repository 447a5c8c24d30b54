use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid .editorconfig {path}: line {line}: {message}")]
    EditorConfig {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl EcGuardError {
    /// Short category label used as the heading of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::EditorConfig { .. } => "EditorConfig",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
            Self::ThreadPool(_) => "Runtime",
        }
    }

    /// Actionable hint for the user, when one exists.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TomlParse(_) => Some("run `ec-guard config validate` to locate the problem"),
            Self::InvalidPattern { .. } => {
                Some("exclude patterns use glob syntax, e.g. \"**/vendor/**\"")
            }
            Self::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("check that the path exists and is spelled correctly")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EcGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
