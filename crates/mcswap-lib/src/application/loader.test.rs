use super::*;
use crate::primitives::TerminalCapsDetectIntent;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_loading_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.color, TerminalCapsDetectIntent::Auto);
    assert_eq!(config.modrinth_url, crate::api::DEFAULT_MODRINTH_URL);
    assert!(!config.yes);
}

#[test]
fn test_config_merging() {
    let base = AppConfig::default();
    let override_config = AppConfig {
        log_level: 4,
        color: TerminalCapsDetectIntent::Always,
        game_dir: Some(PathBuf::from("/games/minecraft")),
        modrinth_url: "http://localhost:1234".to_string(),
        yes: true,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.color, TerminalCapsDetectIntent::Always);
    assert_eq!(merged.game_dir, Some(PathBuf::from("/games/minecraft")));
    assert_eq!(merged.modrinth_url, "http://localhost:1234");
    assert!(merged.yes);
    assert_eq!(merged.net_timeout, 30);
}

#[test]
fn test_merge_keeps_base_when_other_is_default() {
    let base = AppConfig {
        net_timeout: 5,
        workdir: Some(PathBuf::from("/profiles")),
        ..AppConfig::default()
    };

    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.net_timeout, 5);
    assert_eq!(merged.workdir, Some(PathBuf::from("/profiles")));
}

#[test]
fn test_validate_fills_workdir() {
    let mut config = AppConfig::default();
    config.validate().unwrap();
    assert!(config.workdir.is_some());
}

#[test]
fn test_validate_rejects_file_as_workdir() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    let mut config = AppConfig {
        workdir: Some(file),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWorkDir { .. })
    ));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_resolve_applies_environment_color() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = AppConfig::resolve_with_env(AppConfig::default(), &env).unwrap();
    assert_eq!(config.color, TerminalCapsDetectIntent::Never);
}

#[test]
fn test_resolve_cli_color_beats_environment() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let cli = AppConfig {
        color: TerminalCapsDetectIntent::Always,
        ..AppConfig::default()
    };

    let config = AppConfig::resolve_with_env(cli, &env).unwrap();
    assert_eq!(config.color, TerminalCapsDetectIntent::Always);
}

#[test]
fn test_missing_env_files_are_skipped() {
    let temp = TempDir::new().unwrap();
    assert!(load_env_files(temp.path()).is_ok());
}

#[test]
fn test_malformed_env_file_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".env"), "MCSWAP_LOADER_TEST='unterminated\n").unwrap();

    let err = load_env_files(temp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::EnvFileError { ref file, .. } if file == ".env"));
}

#[test]
fn test_networking_config_from_app_config() {
    let config = AppConfig {
        net_timeout: 7,
        log_level: 4,
        ..AppConfig::default()
    };

    let networking = config.networking_config();
    assert_eq!(networking.timeout_seconds, 7);
    assert!(networking.trace_requests);
}
