mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::error::{EcGuardError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Whether an explicitly named file passes the filter.
    fn accepts(&self, path: &Path) -> bool;
}

/// Expand the command-line paths into the list of files to check.
///
/// Directories are scanned; files are kept when they pass the filter.
/// Duplicates are dropped, keeping the first occurrence.
///
/// # Errors
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn collect_files(paths: &[PathBuf], scanner: &dyn FileScanner) -> Result<Vec<PathBuf>> {
    let mut files = IndexSet::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else if path.is_file() {
            if scanner.accepts(path) {
                files.insert(path.clone());
            }
        } else {
            return Err(EcGuardError::FileRead {
                path: path.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
    }

    Ok(files.into_iter().collect())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
