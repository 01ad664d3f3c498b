use memora_analysis::config::AnalyzerConfig;
use memora_cli::config::{
    CURRENT_VERSION, MemoraConfig, config_path, has_config, load_config, save_config,
};
use memora_core::models::risk::RiskLevel;

#[test]
fn save_then_load_keeps_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = MemoraConfig::new("Maria Silva");
    config.analyzer.policy = "simple".to_string();
    config.data_dir = Some(dir.path().join("data"));

    assert!(!has_config(dir.path()));
    save_config(dir.path(), &config).unwrap();
    assert!(has_config(dir.path()));
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config(dir.path()).unwrap();
    assert_eq!(loaded, config);
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    save_config(dir.path(), &MemoraConfig::new("")).unwrap();
    let mode = std::fs::metadata(config_path(dir.path()))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = MemoraConfig::new("");
    config.config_version = 0;
    save_config(dir.path(), &config).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(config_path(dir.path())).unwrap()).unwrap();
    assert_eq!(raw["config_version"], CURRENT_VERSION);
}

#[test]
fn pre_versioned_config_is_stamped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_path(dir.path()),
        r#"{
            "analyzer": {"policy": "simple", "alert_threshold": "urgent"},
            "created_at": "2026-01-05T09:00:00Z"
        }"#,
    )
    .unwrap();

    let config = load_config(dir.path()).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.patient_name, "");
    assert_eq!(config.analyzer.policy, "simple");
    assert_eq!(config.analyzer.alert_threshold, RiskLevel::High);
    assert_eq!(config.analyzer.max_input_chars, AnalyzerConfig::default().max_input_chars);
}

#[test]
fn version_beyond_u32_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_path(dir.path()),
        r#"{"config_version": 4294967297, "patient_name": "", "created_at": "2026-01-05T09:00:00Z"}"#,
    )
    .unwrap();

    let err = load_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains("invalid config_version"));
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_path(dir.path()),
        r#"{"config_version": 99, "patient_name": "", "created_at": "2026-01-05T09:00:00Z"}"#,
    )
    .unwrap();

    let err = load_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn unknown_policy_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_path(dir.path()),
        r#"{"config_version": 1, "patient_name": "", "analyzer": {"policy": "median"}, "created_at": "2026-01-05T09:00:00Z"}"#,
    )
    .unwrap();

    let err = load_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains("invalid analyzer settings"));
}

#[test]
fn missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(dir.path()).is_err());
}
