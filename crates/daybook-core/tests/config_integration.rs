//! Config file load/save tests against a temporary directory.

use daybook_core::{Config, ConfigError, CoreError, Section, Workspace};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.set("default_section", "reading").unwrap();
    cfg.set("calendar.show_settled", "true").unwrap();
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.default_section, Section::Reading);

    let ws = Workspace::from_config(&loaded);
    assert_eq!(ws.current(), Section::Reading);
    assert!(ws.options().show_settled);
}

#[test]
fn test_malformed_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_section = [").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Config(ConfigError::LoadFailed { .. })
    ));
}
