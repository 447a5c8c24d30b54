use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::Logger;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EcGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            Logger::new(cli.color.into(), cli.verbose, cli.quiet).error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(EcGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# ec-guard configuration file
# Rules come from .editorconfig; this file only tunes how ec-guard runs.
version = "1"

# Extra exclude patterns (glob syntax), added to the built-in defaults
exclude = [
    # "**/testdata/**",
]

# Do not apply the built-in excludes (VCS dirs, node_modules, lock files, binaries)
ignore_defaults = false

# Respect .gitignore files
gitignore = true

# Allow spaces after the leading tabs of tab-indented lines (alignment)
spaces_after_tabs = false

# Line length limit for files whose .editorconfig sets none (0 = no limit)
max_line_length = 0

# Charset used for line length counting instead of the .editorconfig one
# charset = "utf-8"

# Check files in parallel
parallel = true

# Report format: default, gcc, github-actions or codeclimate
format = "default"

# Switch checks off regardless of .editorconfig
[disable]
trim_trailing_whitespace = false
end_of_line = false
insert_final_newline = false
indentation = false
indent_size = false
max_line_length = false
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
