//! Nearest-match `.editorconfig` resolution.
//!
//! For a file, every `.editorconfig` from the file's directory up to the
//! filesystem root (or the first one declaring `root = true`) is consulted.
//! Properties from files closer to the target, and from later sections
//! within a file, take precedence.

mod glob;
mod parser;

pub use glob::SectionGlob;
pub use parser::{EditorConfigFile, Section, parse};

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

use crate::config::{FileSystem, RealFileSystem};
use crate::error::{EcGuardError, Result};
use crate::validation::{EditorSettings, EndOfLine, IndentStyle, SettingsLookup};

pub const EDITORCONFIG_NAME: &str = ".editorconfig";

const UNSET: &str = "unset";

type Cached = Option<Arc<EditorConfigFile>>;

/// Resolves [`EditorSettings`] from `.editorconfig` files.
///
/// Parsed files are cached per directory for the lifetime of the resolver,
/// so a run reads each `.editorconfig` at most once.
#[derive(Debug)]
pub struct EditorConfigResolver<F: FileSystem = RealFileSystem> {
    fs: F,
    cache: RwLock<HashMap<PathBuf, Cached>>,
}

impl Default for EditorConfigResolver<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorConfigResolver<RealFileSystem> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_fs(RealFileSystem)
    }
}

impl<F: FileSystem> EditorConfigResolver<F> {
    #[must_use]
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Raw properties that apply to `path`, with `unset` values removed.
    ///
    /// # Errors
    /// Returns an error if an `.editorconfig` on the way up cannot be read or
    /// parsed.
    pub fn properties_for(&self, path: &Path) -> Result<IndexMap<String, String>> {
        let path = self.absolute(path)?;

        let mut chain = Vec::new();
        for dir in path.ancestors().skip(1) {
            if let Some(file) = self.load_dir(dir)? {
                let root = file.root;
                chain.push((dir, file));
                if root {
                    break;
                }
            }
        }

        let mut properties = IndexMap::new();
        for (dir, file) in chain.iter().rev() {
            let Some(relative) = relative_path(&path, dir) else {
                continue;
            };
            for section in file.sections.iter().filter(|s| s.matches(&relative)) {
                for (key, value) in &section.properties {
                    properties.insert(key.clone(), value.clone());
                }
            }
        }

        properties.retain(|_, value| value != UNSET);
        Ok(properties)
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.fs.current_dir()?.join(path)
        };
        Ok(normalize(dunce::simplified(&joined)))
    }

    fn load_dir(&self, dir: &Path) -> Result<Cached> {
        if let Ok(cache) = self.cache.read()
            && let Some(cached) = cache.get(dir)
        {
            return Ok(cached.clone());
        }

        let candidate = dir.join(EDITORCONFIG_NAME);
        let loaded = if self.fs.is_file(&candidate) {
            let content =
                self.fs
                    .read_to_string(&candidate)
                    .map_err(|source| EcGuardError::FileRead {
                        path: candidate.clone(),
                        source,
                    })?;
            Some(Arc::new(parse(&content, &candidate)?))
        } else {
            None
        };

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(dir.to_path_buf(), loaded.clone());
        }
        Ok(loaded)
    }
}

impl<F: FileSystem + Send + Sync> SettingsLookup for EditorConfigResolver<F> {
    fn settings_for(&self, path: &Path) -> Result<EditorSettings> {
        Ok(settings_from_properties(&self.properties_for(path)?))
    }
}

/// Interpret raw `.editorconfig` properties. Unknown or malformed values are
/// treated as unset.
#[must_use]
pub fn settings_from_properties(properties: &IndexMap<String, String>) -> EditorSettings {
    let get = |key: &str| properties.get(key).map(String::as_str);
    let number = |key: &str| get(key).and_then(|v| v.parse::<usize>().ok());

    let indent_size = match get("indent_size") {
        Some("tab") => number("tab_width"),
        _ => number("indent_size"),
    };

    EditorSettings {
        indent_style: match get("indent_style") {
            Some("space") => Some(IndentStyle::Space),
            Some("tab") => Some(IndentStyle::Tab),
            _ => None,
        },
        indent_size: indent_size.unwrap_or(0),
        end_of_line: match get("end_of_line") {
            Some("lf") => Some(EndOfLine::Lf),
            Some("cr") => Some(EndOfLine::Cr),
            Some("crlf") => Some(EndOfLine::Crlf),
            _ => None,
        },
        insert_final_newline: match get("insert_final_newline") {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        },
        trim_trailing_whitespace: get("trim_trailing_whitespace") == Some("true"),
        // `off` fails to parse and means no limit, like an unset value.
        max_line_length: number("max_line_length").unwrap_or(0),
        charset: get("charset").map(str::to_string),
    }
}

/// `path` relative to `dir`, `/`-separated.
fn relative_path(path: &Path, dir: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

/// Resolve `.` and `..` lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
