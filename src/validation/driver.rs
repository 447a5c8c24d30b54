use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::output::CheckProgress;

use super::{FileValidator, ValidationError};

/// The validation outcome of one file. Produced for every input path, even
/// when the file is clean or could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub errors: Vec<ValidationError>,
}

impl FileReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

fn validate_one(path: &Path, validator: &FileValidator<'_>) -> FileReport {
    let errors = validator
        .validate_file(path)
        .unwrap_or_else(|failure| vec![ValidationError::from_failure(&failure)]);
    FileReport {
        path: path.to_path_buf(),
        errors,
    }
}

/// Validate `paths` one after another. Reports are returned in input order.
#[must_use]
pub fn process_validation(paths: &[PathBuf], validator: &FileValidator<'_>) -> Vec<FileReport> {
    paths.iter().map(|p| validate_one(p, validator)).collect()
}

/// Validate `paths` on the current rayon pool.
///
/// Reports are returned in input order regardless of completion order. A
/// file that fails does not stop the others.
#[must_use]
pub fn process_validation_parallel(
    paths: &[PathBuf],
    validator: &FileValidator<'_>,
    progress: Option<&CheckProgress>,
) -> Vec<FileReport> {
    let reports = paths
        .par_iter()
        .map(|path| {
            let report = validate_one(path, validator);
            if let Some(progress) = progress {
                progress.inc();
            }
            report
        })
        .collect();

    if let Some(progress) = progress {
        progress.finish();
    }
    reports
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
