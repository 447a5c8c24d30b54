use std::path::Path;

use indexmap::IndexMap;

use crate::error::{EcGuardError, Result};

use super::glob::SectionGlob;

/// Properties whose values are case-insensitive and stored lowercased.
const KNOWN_PROPERTIES: &[&str] = &[
    "root",
    "indent_style",
    "indent_size",
    "tab_width",
    "end_of_line",
    "charset",
    "insert_final_newline",
    "trim_trailing_whitespace",
    "max_line_length",
];

/// One parsed `.editorconfig` file.
#[derive(Debug, Clone, Default)]
pub struct EditorConfigFile {
    /// `root = true` in the preamble: stop searching parent directories.
    pub root: bool,
    pub sections: Vec<Section>,
}

/// A `[pattern]` section and its properties in file order.
#[derive(Debug, Clone)]
pub struct Section {
    pub pattern: String,
    glob: Option<SectionGlob>,
    pub properties: IndexMap<String, String>,
}

impl Section {
    fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            glob: SectionGlob::new(pattern),
            properties: IndexMap::new(),
        }
    }

    /// Whether the section applies to `relative`, a `/`-separated path
    /// relative to the `.editorconfig` directory. Patterns that failed to
    /// compile never match.
    #[must_use]
    pub fn matches(&self, relative: &str) -> bool {
        self.glob.as_ref().is_some_and(|g| g.is_match(relative))
    }
}

/// Parse the contents of the `.editorconfig` at `path`.
///
/// # Errors
/// Returns [`EcGuardError::EditorConfig`] for a malformed line.
pub fn parse(content: &str, path: &Path) -> Result<EditorConfigFile> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut file = EditorConfigFile::default();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(['#', ';']) {
            continue;
        }

        let invalid = |message: &str| EcGuardError::EditorConfig {
            path: path.to_path_buf(),
            line: index + 1,
            message: message.to_string(),
        };

        if let Some(header) = line.strip_prefix('[') {
            let pattern = header
                .strip_suffix(']')
                .ok_or_else(|| invalid("unterminated section header"))?;
            file.sections.push(Section::new(pattern.trim()));
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| invalid("expected `key = value`"))?;
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Err(invalid("missing property name"));
        }
        let value = value.trim();
        let value = if KNOWN_PROPERTIES.contains(&key.as_str()) {
            value.to_lowercase()
        } else {
            value.to_string()
        };

        match file.sections.last_mut() {
            Some(section) => {
                section.properties.insert(key, value);
            }
            None if key == "root" => file.root = value == "true",
            // Other preamble properties have no meaning.
            None => {}
        }
    }

    Ok(file)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
