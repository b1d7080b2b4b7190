// tests/config_test.rs
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;
use version_stamp::config::{load_config, Config, LOCAL_CONFIG_FILE};
use version_stamp::domain::DEFAULT_RELEASE_PATTERN;
use version_stamp::StampError;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.release.branch_pattern, DEFAULT_RELEASE_PATTERN);
    assert!(config.behavior.atomic_write);
    assert!(!config.behavior.lock);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[release]
branch_pattern = 'releases/\d+\.\d+'

[behavior]
atomic_write = false
lock = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.release.branch_pattern, r"releases/\d+\.\d+");
    assert!(!config.behavior.atomic_write);
    assert!(config.behavior.lock);

    let matcher = config.release.matcher().unwrap();
    assert!(matcher.is_match("releases/4.12"));
    assert!(!matcher.is_match("releases/4.12-hotfix"));
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/versionstamp.toml"))
        .expect("Failed to load test config");
    assert!(config.behavior.lock);
    assert_eq!(config.release.branch_pattern, DEFAULT_RELEASE_PATTERN);
}

#[test]
#[serial]
fn test_missing_custom_file_is_error() {
    let err = load_config(Some("tests/fixtures/does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, StampError::Config(_)));
}

#[test]
fn test_invalid_pattern_in_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[release]\nbranch_pattern = \"release/[\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Invalid release branch pattern"));
}

#[test]
#[serial]
fn test_local_config_file_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[behavior]\natomic_write = false\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert!(!result.unwrap().behavior.atomic_write);
}
