use std::path::PathBuf;

use super::*;

fn check_args(args: &[&str]) -> CheckArgs {
    let cli = Cli::parse_from(std::iter::once("ec-guard").chain(args.iter().copied()));
    match cli.command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_default_path() {
    let args = check_args(&["check"]);
    assert_eq!(args.paths, vec![PathBuf::from(".")]);
    assert_eq!(args.format, None);
    assert!(!args.dry_run);
}

#[test]
fn cli_check_with_paths() {
    let args = check_args(&["check", "src", "docs/README.md"]);
    assert_eq!(
        args.paths,
        vec![PathBuf::from("src"), PathBuf::from("docs/README.md")]
    );
}

#[test]
fn cli_check_with_config() {
    let args = check_args(&["check", "--config", "custom.toml"]);
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_check_with_format() {
    let args = check_args(&["check", "--format", "github-actions"]);
    assert_eq!(args.format, Some(OutputFormat::GithubActions));

    let args = check_args(&["check", "-f", "gcc"]);
    assert_eq!(args.format, Some(OutputFormat::Gcc));
}

#[test]
fn cli_check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["ec-guard", "check", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_multiple_excludes() {
    let args = check_args(&["check", "-x", "**/gen/**", "--exclude", "*.bak"]);
    assert_eq!(args.exclude, vec!["**/gen/**", "*.bak"]);
}

#[test]
fn cli_check_disable_flags() {
    let args = check_args(&[
        "check",
        "--disable-trim-trailing-whitespace",
        "--disable-end-of-line",
        "--disable-insert-final-newline",
        "--disable-indentation",
        "--disable-indent-size",
        "--disable-max-line-length",
    ]);
    assert!(args.disable_trim_trailing_whitespace);
    assert!(args.disable_end_of_line);
    assert!(args.disable_insert_final_newline);
    assert!(args.disable_indentation);
    assert!(args.disable_indent_size);
    assert!(args.disable_max_line_length);
}

#[test]
fn cli_check_jobs_conflicts_with_no_parallel() {
    let args = check_args(&["check", "--jobs", "4"]);
    assert_eq!(args.jobs, Some(4));

    let result = Cli::try_parse_from(["ec-guard", "check", "--jobs", "4", "--no-parallel"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["ec-guard", "check", "-vv", "--color", "never", "--no-config"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
    assert!(!cli.quiet);
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["ec-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".ec-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate_default_path() {
    let cli = Cli::parse_from(["ec-guard", "config", "validate"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => assert_eq!(config, PathBuf::from(".ec-guard.toml")),
        _ => panic!("Expected Config Validate command"),
    }
}

#[test]
fn cli_config_show_with_path() {
    let cli = Cli::parse_from(["ec-guard", "config", "show", "-c", "ci.toml"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config },
        }) => assert_eq!(config, Some(PathBuf::from("ci.toml"))),
        _ => panic!("Expected Config Show command"),
    }
}
