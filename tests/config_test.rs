// tests/config_test.rs
use std::io::Write;
use tempfile::NamedTempFile;

use release_tag::config::{load_config, Config};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.remote, "origin");
    assert_eq!(config.branch, "main");
    assert_eq!(config.tag_prefix, "v");
    assert!(config.categories.contains(&"feat".to_string()));
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
remote = "upstream"
branch = "release"
tag_prefix = "r"
categories = ["feat", "fix", "docs"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.branch, "release");
    assert_eq!(config.tag_prefix, "r");
    assert_eq!(config.categories, vec!["feat", "fix", "docs"]);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"branch = \"master\"\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.branch, "master");
    assert_eq!(config.remote, "origin");
    assert_eq!(config.tag_prefix, "v");
}

#[test]
fn test_missing_explicit_file_errors() {
    assert!(load_config(Some("/nonexistent/releasetag.toml")).is_err());
}

#[test]
fn test_invalid_toml_errors() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"remote = [not toml").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Configuration error"));
}
