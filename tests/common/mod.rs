#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the ec-guard binary.
#[macro_export]
macro_rules! ec_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ec-guard"))
    };
}

/// A root `.editorconfig` covering every file, so lookups never leave the
/// fixture directory.
pub const BASIC_EDITORCONFIG: &str = "root = true

[*]
indent_style = space
indent_size = 4
end_of_line = lf
insert_final_newline = true
trim_trailing_whitespace = true
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture holding [`BASIC_EDITORCONFIG`].
    pub fn with_editorconfig() -> Self {
        let fixture = Self::new();
        fixture.create_editorconfig(BASIC_EDITORCONFIG);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes in the temp directory.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_editorconfig(&self, content: &str) {
        self.create_file(".editorconfig", content);
    }

    /// Creates an ec-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".ec-guard.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
