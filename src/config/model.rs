use serde::{Deserialize, Serialize};

use crate::encoding::lookup_charset;
use crate::error::{EcGuardError, Result};
use crate::output::OutputFormat;
use crate::validation::{CheckConfig, DisabledChecks};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Paths skipped unless `ignore_defaults` is set: VCS metadata, dependency
/// trees, lock files, generated assets and binary formats.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "**/.git/**",
    "**/.hg/**",
    "**/.svn/**",
    "**/.bzr/**",
    "**/node_modules/**",
    "**/*.lock",
    "**/package-lock.json",
    "**/pnpm-lock.yaml",
    "**/go.sum",
    "**/*.min.js",
    "**/*.min.css",
    "**/*.map",
    "**/*.patch",
    "**/*.diff",
    "**/*.{png,jpg,jpeg,gif,bmp,ico,webp,tif,tiff,psd}",
    "**/*.{mp3,mp4,wav,ogg,flac,avi,mov,mkv,webm}",
    "**/*.{ttf,otf,woff,woff2,eot}",
    "**/*.{pdf,doc,docx,xls,xlsx,ppt,pptx}",
    "**/*.{zip,tar,gz,tgz,bz2,xz,7z,rar,jar,war}",
    "**/*.{exe,dll,so,dylib,a,o,obj,class,pyc,wasm}",
];

/// Tool configuration, read from `.ec-guard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Extra exclude globs, added to the defaults.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Do not apply [`DEFAULT_EXCLUDES`].
    #[serde(default)]
    pub ignore_defaults: bool,

    /// Respect `.gitignore` files while walking directories.
    #[serde(default = "default_true")]
    pub gitignore: bool,

    #[serde(default)]
    pub spaces_after_tabs: bool,

    /// Line length limit for files whose `.editorconfig` sets none (0 = none).
    #[serde(default)]
    pub max_line_length: usize,

    /// Charset used for line length counting instead of the `.editorconfig` one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    #[serde(default = "default_true")]
    pub parallel: bool,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub disable: DisabledChecks,
}

const fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            exclude: Vec::new(),
            ignore_defaults: false,
            gitignore: true,
            spaces_after_tabs: false,
            max_line_length: 0,
            charset: None,
            parallel: true,
            format: OutputFormat::default(),
            disable: DisabledChecks::default(),
        }
    }
}

impl Config {
    /// Validate values that parse but make no sense.
    ///
    /// # Errors
    /// Returns an error for an unsupported version, an invalid exclude glob
    /// or an unknown charset.
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.version
            && version != CONFIG_VERSION
        {
            return Err(EcGuardError::Config(format!(
                "Unsupported config version '{version}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }

        for pattern in &self.exclude {
            globset::Glob::new(pattern).map_err(|source| EcGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        if let Some(charset) = &self.charset
            && lookup_charset(charset).is_none()
        {
            return Err(EcGuardError::Config(format!("Unknown charset '{charset}'")));
        }

        Ok(())
    }

    /// Exclude globs in effect: the defaults (unless ignored) then the
    /// configured ones.
    #[must_use]
    pub fn effective_excludes(&self) -> Vec<String> {
        let defaults = if self.ignore_defaults {
            &[][..]
        } else {
            DEFAULT_EXCLUDES
        };
        defaults
            .iter()
            .map(|p| (*p).to_string())
            .chain(self.exclude.iter().cloned())
            .collect()
    }

    /// The validation options derived from this configuration.
    #[must_use]
    pub fn check_config(&self) -> CheckConfig {
        CheckConfig {
            disabled: self.disable,
            spaces_after_tabs: self.spaces_after_tabs,
            max_line_length: self.max_line_length,
            charset: self.charset.clone(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
