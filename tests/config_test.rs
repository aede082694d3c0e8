// tests/config_test.rs
use autover::config::{load, VersionerOptions};
use autover::domain::{AutoIncrement, MajorMinor};
use autover::error::AutoverError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_explicit_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
tag_prefix = "release-"
min_version = "1.3"
build_metadata = "ci.7"
auto_increment = "major"
default_prerelease = ["rc", "0"]
ignore_height = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let options = load(Some(temp_file.path())).unwrap();
    assert_eq!(options.tag_prefix, "release-");
    assert_eq!(options.min_major_minor, MajorMinor::new(1, 3));
    assert_eq!(options.build_metadata, "ci.7");
    assert_eq!(options.auto_increment, AutoIncrement::Major);
    assert_eq!(options.default_prerelease, vec!["rc", "0"]);
    assert!(options.ignore_height);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"tag_prefix = \"\"\n").unwrap();
    temp_file.flush().unwrap();

    let options = load(Some(temp_file.path())).unwrap();
    assert_eq!(options.tag_prefix, "");
    assert_eq!(options.auto_increment, AutoIncrement::Patch);
    assert_eq!(options.default_prerelease, vec!["alpha", "0"]);
    assert!(!options.ignore_height);
}

#[test]
fn test_unknown_key_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"tag_prfix = \"v\"\n").unwrap();
    temp_file.flush().unwrap();

    match load(Some(temp_file.path())) {
        Err(AutoverError::InvalidConfiguration(_)) => {}
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn test_bad_auto_increment_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"auto_increment = \"huge\"\n").unwrap();
    temp_file.flush().unwrap();

    assert!(load(Some(temp_file.path())).is_err());
}

#[test]
fn test_bad_min_version_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"min_version = \"two.oh\"\n").unwrap();
    temp_file.flush().unwrap();

    assert!(load(Some(temp_file.path())).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = load(Some(std::path::Path::new(
        "/definitely/not/here/autover.toml",
    )));
    assert!(matches!(result, Err(AutoverError::Io(_))));
}

#[test]
fn test_validation_catches_bad_metadata_before_any_walk() {
    let options = VersionerOptions {
        build_metadata: "oops metadata".to_string(),
        ..VersionerOptions::default()
    };
    assert!(matches!(
        options.validate(),
        Err(AutoverError::InvalidConfiguration(_))
    ));
}
