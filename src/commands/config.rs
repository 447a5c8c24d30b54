use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{FileConfigLoader, RealFileSystem};
use crate::output::Logger;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EcGuardError, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let logger = Logger::new(cli.color.into(), cli.verbose, cli.quiet);
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            format!("Configuration is valid: {}\n", config.display())
        }),
        ConfigAction::Show { config } => run_config_show_impl(config.as_deref(), cli.no_config),
    };

    match result {
        Ok(text) => {
            print!("{text}");
            EXIT_SUCCESS
        }
        Err(e) => {
            logger.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has invalid values.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(EcGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    FileConfigLoader::<RealFileSystem>::parse_config(&content)?;
    Ok(())
}

/// Renders the effective configuration as TOML, headed by where it came from.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(config_path: Option<&Path>, no_config: bool) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;
    let source = loaded
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());

    let body = toml::to_string_pretty(&loaded.config)?;
    Ok(format!("# Source: {source}\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
