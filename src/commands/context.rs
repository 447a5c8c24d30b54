use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};

/// Load the configuration for a command.
///
/// `--no-config` yields the defaults; an explicit path must exist; otherwise
/// the usual discovery applies.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write `content` to `output_path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
