use super::*;

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(config.gitignore);
    assert!(config.parallel);
    assert!(!config.ignore_defaults);
    assert_eq!(config.max_line_length, 0);
    assert_eq!(config.format, OutputFormat::Default);
    assert_eq!(config.disable, DisabledChecks::default());
}

#[test]
fn empty_toml_equals_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parses_all_keys() {
    let config: Config = toml::from_str(
        r#"
version = "1"
exclude = ["**/fixtures/**"]
ignore_defaults = true
gitignore = false
spaces_after_tabs = true
max_line_length = 120
charset = "utf-8"
parallel = false
format = "github-actions"

[disable]
indent_size = true
max_line_length = true
"#,
    )
    .unwrap();

    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.exclude, vec!["**/fixtures/**"]);
    assert!(config.ignore_defaults);
    assert!(!config.gitignore);
    assert!(config.spaces_after_tabs);
    assert_eq!(config.max_line_length, 120);
    assert_eq!(config.charset.as_deref(), Some("utf-8"));
    assert!(!config.parallel);
    assert_eq!(config.format, OutputFormat::GithubActions);
    assert!(config.disable.indent_size);
    assert!(config.disable.max_line_length);
    assert!(!config.disable.indentation);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<Config>("max_lines = 3").is_err());
    assert!(toml::from_str::<Config>("[disable]\nunknown = true").is_err());
}

#[test]
fn unknown_format_is_rejected() {
    assert!(toml::from_str::<Config>("format = \"xml\"").is_err());
}

#[test]
fn validate_accepts_default_and_current_version() {
    assert!(Config::default().validate().is_ok());
    let config = Config {
        version: Some(CONFIG_VERSION.to_string()),
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_unsupported_version() {
    let config = Config {
        version: Some("9".to_string()),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '9'"));
}

#[test]
fn validate_rejects_invalid_glob() {
    let config = Config {
        exclude: vec!["src/[".to_string()],
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(EcGuardError::InvalidPattern { .. })
    ));
}

#[test]
fn validate_rejects_unknown_charset() {
    let config = Config {
        charset: Some("klingon".to_string()),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Unknown charset 'klingon'"));
}

#[test]
fn effective_excludes_include_defaults_first() {
    let config = Config {
        exclude: vec!["build/**".to_string()],
        ..Config::default()
    };
    let excludes = config.effective_excludes();
    assert_eq!(excludes.len(), DEFAULT_EXCLUDES.len() + 1);
    assert_eq!(excludes[0], DEFAULT_EXCLUDES[0]);
    assert_eq!(excludes.last().map(String::as_str), Some("build/**"));
}

#[test]
fn effective_excludes_without_defaults() {
    let config = Config {
        ignore_defaults: true,
        exclude: vec!["build/**".to_string()],
        ..Config::default()
    };
    assert_eq!(config.effective_excludes(), vec!["build/**"]);
}

#[test]
fn check_config_carries_validation_options() {
    let config = Config {
        spaces_after_tabs: true,
        max_line_length: 80,
        charset: Some("latin1".to_string()),
        disable: DisabledChecks {
            end_of_line: true,
            ..DisabledChecks::default()
        },
        ..Config::default()
    };

    let check = config.check_config();
    assert!(check.spaces_after_tabs);
    assert_eq!(check.max_line_length, 80);
    assert_eq!(check.charset.as_deref(), Some("latin1"));
    assert!(check.disabled.end_of_line);
}

#[test]
fn serializes_back_to_toml() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).unwrap();
    assert!(text.contains("gitignore = true"));
    assert!(text.contains("format = \"default\""));
    assert!(text.contains("[disable]"));
    let round: Config = toml::from_str(&text).unwrap();
    assert_eq!(round, config);
}
