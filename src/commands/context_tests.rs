use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn no_config_returns_defaults() {
    let result = load_config(Some(Path::new("does-not-exist.toml")), true).unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ci.toml");
    fs::write(&path, "max_line_length = 100\n").unwrap();

    let result = load_config(Some(&path), false).unwrap();

    assert_eq!(result.config.max_line_length, 100);
    assert_eq!(result.source.as_deref(), Some(path.as_path()));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(&dir.path().join("missing.toml")), false);
    assert!(result.is_err());
}

#[test]
fn write_output_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports/nested/out.txt");

    write_output(Some(&path), "report\n", false).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "report\n");
}

#[test]
fn write_output_to_file_ignores_quiet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");

    write_output(Some(&path), "[]\n", true).unwrap();

    assert!(path.exists());
}
