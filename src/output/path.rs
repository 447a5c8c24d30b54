//! Path display for reports.

use std::path::Path;

/// Format a path for display: forward slashes, without a leading `./`.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    let mut stripped = text.as_str();
    while let Some(rest) = stripped.strip_prefix("./") {
        stripped = rest;
    }
    if stripped.is_empty() {
        ".".to_string()
    } else {
        stripped.to_string()
    }
}
