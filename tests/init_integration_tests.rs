//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    ec_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".ec-guard.toml");
    assert!(content.contains("version = \"1\""));
    assert!(content.contains("[disable]"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();

    ec_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", "custom.toml"])
        .assert()
        .success();

    assert!(fixture.path().join("custom.toml").exists());
}

#[test]
fn init_fails_if_file_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing\n");

    ec_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read(".ec-guard.toml"), "# existing\n");
}

#[test]
fn init_force_overwrites_existing() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing\n");

    ec_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read(".ec-guard.toml").contains("gitignore = true"));
}

#[test]
fn init_output_is_a_valid_config() {
    let fixture = TestFixture::new();

    ec_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    ec_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success();
}
