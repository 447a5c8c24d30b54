use std::fs;

use tempfile::TempDir;

use super::*;
use crate::validation::{Check, CheckConfig, EditorSettings, FixedSettings};

fn trailing_whitespace_lookup() -> FixedSettings {
    FixedSettings(EditorSettings {
        trim_trailing_whitespace: true,
        ..EditorSettings::default()
    })
}

/// Files `f0.txt`..`f{n-1}.txt`; every odd file has trailing whitespace.
fn create_files(dir: &TempDir, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let path = dir.path().join(format!("f{i}.txt"));
            let content = if i % 2 == 1 { "dirty \n" } else { "clean\n" };
            fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

#[test]
fn empty_input_yields_no_reports() {
    let config = CheckConfig::default();
    let lookup = trailing_whitespace_lookup();
    let validator = FileValidator::new(&config, &lookup);

    assert!(process_validation(&[], &validator).is_empty());
    assert!(process_validation_parallel(&[], &validator, None).is_empty());
}

#[test]
fn every_path_gets_a_report_in_input_order() {
    let dir = TempDir::new().unwrap();
    let paths = create_files(&dir, 6);
    let config = CheckConfig::default();
    let lookup = trailing_whitespace_lookup();
    let validator = FileValidator::new(&config, &lookup);

    let reports = process_validation(&paths, &validator);

    assert_eq!(reports.len(), paths.len());
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.path, paths[i]);
        assert_eq!(report.is_clean(), i % 2 == 0);
    }
}

#[test]
fn parallel_matches_sequential() {
    let dir = TempDir::new().unwrap();
    let paths = create_files(&dir, 64);
    let config = CheckConfig::default();
    let lookup = trailing_whitespace_lookup();
    let validator = FileValidator::new(&config, &lookup);

    let sequential = process_validation(&paths, &validator);
    let progress = CheckProgress::new(paths.len(), true);
    let parallel = process_validation_parallel(&paths, &validator, Some(&progress));

    assert_eq!(sequential, parallel);
}

#[test]
fn unreadable_file_does_not_abort_batch() {
    let dir = TempDir::new().unwrap();
    let mut paths = create_files(&dir, 2);
    paths.insert(1, dir.path().join("missing.txt"));

    let config = CheckConfig::default();
    let lookup = trailing_whitespace_lookup();
    let validator = FileValidator::new(&config, &lookup);

    let reports = process_validation_parallel(&paths, &validator, None);

    assert_eq!(reports.len(), 3);
    assert!(reports[0].is_clean());
    assert_eq!(reports[1].error_count(), 1);
    assert_eq!(reports[1].errors[0].check, Check::File);
    assert_eq!(reports[1].errors[0].line, None);
    assert_eq!(reports[2].error_count(), 1);
    assert_eq!(reports[2].errors[0].check, Check::TrimTrailingWhitespace);
}
