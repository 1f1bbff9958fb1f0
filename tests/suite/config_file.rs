//! Config file loading against real files on disk.

use std::fs;

use valentine_engine::{CardConfig, ConfigError};

#[test]
fn loads_a_full_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [card]
        recipient = "Alex"
        prompt = "Will you marry me?"
        stage_dwell_secs = 2.5
        playback_frame_ms = 100

        [app]
        high_contrast = true
        "#,
    )
    .expect("write config");

    let config = CardConfig::load_from(path).expect("config loads");
    let card = config.card.as_ref().expect("card section");
    assert_eq!(card.recipient.as_deref(), Some("Alex"));
    assert_eq!(card.prompt.as_deref(), Some("Will you marry me?"));
    assert_eq!(config.stage_dwell().as_millis(), 2500);
    assert_eq!(config.playback_frame_interval().as_millis(), 100);
    assert!(config.app.as_ref().is_some_and(|app| app.high_contrast));
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.toml");

    let err = CardConfig::load_from(path.clone()).expect_err("missing file");
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn malformed_toml_reports_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[card\nrecipient = ").expect("write config");

    let err = CardConfig::load_from(path.clone()).expect_err("bad toml");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
    // The message is what ends up in the log; it should locate the file.
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn empty_file_is_a_valid_default_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "").expect("write config");

    let config = CardConfig::load_from(path).expect("empty config loads");
    assert!(config.card.is_none());
    assert!(config.app.is_none());
}
