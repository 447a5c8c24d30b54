use clap::Parser;

use super::*;
use crate::cli::Commands;
use crate::output::OutputFormat;

fn check_args(args: &[&str]) -> CheckArgs {
    let cli = Cli::parse_from(["ec-guard", "check"].into_iter().chain(args.iter().copied()));
    match cli.command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn no_flags_leave_config_untouched() {
    let mut config = Config {
        max_line_length: 80,
        ..Config::default()
    };
    let expected = config.clone();

    apply_cli_overrides(&mut config, &check_args(&[]));

    assert_eq!(config, expected);
}

#[test]
fn excludes_are_appended() {
    let mut config = Config {
        exclude: vec!["**/fixtures/**".to_string()],
        ..Config::default()
    };

    apply_cli_overrides(&mut config, &check_args(&["-x", "*.snap"]));

    assert_eq!(config.exclude, vec!["**/fixtures/**", "*.snap"]);
}

#[test]
fn switches_override_config() {
    let mut config = Config::default();

    apply_cli_overrides(
        &mut config,
        &check_args(&[
            "--ignore-defaults",
            "--no-gitignore",
            "--spaces-after-tabs",
            "--no-parallel",
            "--format",
            "codeclimate",
        ]),
    );

    assert!(config.ignore_defaults);
    assert!(!config.gitignore);
    assert!(config.spaces_after_tabs);
    assert!(!config.parallel);
    assert_eq!(config.format, OutputFormat::Codeclimate);
}

#[test]
fn format_flag_absent_keeps_config_format() {
    let mut config = Config {
        format: OutputFormat::Gcc,
        ..Config::default()
    };

    apply_cli_overrides(&mut config, &check_args(&[]));

    assert_eq!(config.format, OutputFormat::Gcc);
}

#[test]
fn disable_flags_add_to_config() {
    let mut config = Config::default();
    config.disable.end_of_line = true;

    apply_cli_overrides(
        &mut config,
        &check_args(&["--disable-indentation", "--disable-max-line-length"]),
    );

    assert!(config.disable.end_of_line);
    assert!(config.disable.indentation);
    assert!(config.disable.max_line_length);
    assert!(!config.disable.trim_trailing_whitespace);
    assert!(!config.disable.insert_final_newline);
    assert!(!config.disable.indent_size);
}
