use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ec-guard")]
#[command(author, version, about = "Check files against their .editorconfig rules")]
#[command(long_about = "Checks indentation, trailing whitespace, line endings, \
    final newlines and line length against the rules of the nearest .editorconfig files.\n\n\
    Exit codes:\n  \
    0 - All files passed\n  \
    1 - Errors found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files against their .editorconfig rules
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: default, gcc, github-actions, codeclimate]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Do not apply the built-in exclude patterns
    #[arg(long)]
    pub ignore_defaults: bool,

    /// Do not respect .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,

    /// Allow spaces after the leading tabs of tab-indented lines
    #[arg(long)]
    pub spaces_after_tabs: bool,

    #[arg(long)]
    pub disable_trim_trailing_whitespace: bool,

    #[arg(long)]
    pub disable_end_of_line: bool,

    #[arg(long)]
    pub disable_insert_final_newline: bool,

    /// Disable both indentation checks (style and size)
    #[arg(long)]
    pub disable_indentation: bool,

    #[arg(long)]
    pub disable_indent_size: bool,

    #[arg(long)]
    pub disable_max_line_length: bool,

    /// List the files that would be checked, then exit
    #[arg(long)]
    pub dry_run: bool,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Check files one at a time
    #[arg(long, conflicts_with = "jobs")]
    pub no_parallel: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".ec-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file (default: .ec-guard.toml)
        #[arg(short, long, default_value = ".ec-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
