use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use watchignore::config::{
    load_and_validate, load_or_default, DEFAULT_CONFIG_FILES, DEFAULT_DESTINATION,
};
use watchignore::errors::WatchignoreError;
use watchignore_test_utils::builders::SiteConfigBuilder;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");

    let cfg = load_and_validate(file.path()).unwrap();
    let opts = cfg.resolve(Path::new("/work"), None);

    assert_eq!(opts.source, PathBuf::from("/work"));
    assert_eq!(opts.destination, PathBuf::from(DEFAULT_DESTINATION));
    assert!(opts.exclude.is_empty());
    assert_eq!(opts.config_files, DEFAULT_CONFIG_FILES.to_vec());
}

#[test]
fn all_keys_are_read() {
    let file = write_config(
        r#"
source = "site"
destination = "public"
exclude = ["node_modules", "Gemfile.lock"]
config = ["_config.toml"]
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    let opts = cfg.resolve(Path::new("/work"), None);

    assert_eq!(opts.source, PathBuf::from("/work/site"));
    assert_eq!(opts.destination, PathBuf::from("public"));
    assert_eq!(opts.exclude, vec!["node_modules", "Gemfile.lock"]);
    assert_eq!(opts.config_files, vec!["_config.toml"]);
}

#[test]
fn source_override_wins() {
    let cfg = SiteConfigBuilder::new().source("site").build();

    let opts = cfg.resolve(Path::new("/work"), Some(PathBuf::from("/elsewhere/./blog")));

    assert_eq!(opts.source, PathBuf::from("/elsewhere/blog"));
}

#[test]
fn empty_exclude_entry_is_config_error() {
    let file = write_config(r#"exclude = ["vendor", "  "]"#);

    match load_and_validate(file.path()) {
        Err(WatchignoreError::ConfigError(msg)) => {
            assert!(msg.contains("exclude"));
            assert!(msg.contains("#1"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_destination_is_config_error() {
    let raw = SiteConfigBuilder::new().destination("").raw();

    let result = watchignore::config::SiteConfig::try_from(raw);

    assert!(matches!(result, Err(WatchignoreError::ConfigError(_))));
}

#[test]
fn malformed_toml_is_toml_error() {
    let file = write_config("exclude = [unterminated");

    let result = load_and_validate(file.path());

    assert!(matches!(result, Err(WatchignoreError::TomlError(_))));
}

#[test]
fn unknown_value_type_is_toml_error() {
    let file = write_config("exclude = 5");

    let result = load_and_validate(file.path());

    assert!(matches!(result, Err(WatchignoreError::TomlError(_))));
}

#[test]
fn missing_file_is_io_error_unless_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_config.toml");

    assert!(matches!(
        load_and_validate(&path),
        Err(WatchignoreError::IoError(_))
    ));

    let cfg = load_or_default(&path).unwrap();
    assert!(cfg.exclude().is_empty());
    assert!(cfg.source().is_none());
}

#[test]
fn empty_config_entry_is_config_error() {
    let raw = SiteConfigBuilder::new()
        .config_file("_config.toml")
        .config_file(" ")
        .raw();

    match watchignore::config::SiteConfig::try_from(raw) {
        Err(WatchignoreError::ConfigError(msg)) => {
            assert!(msg.contains("`config`"));
            assert!(msg.contains("#1"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_source_is_config_error() {
    let file = write_config(r#"source = """#);

    match load_and_validate(file.path()) {
        Err(WatchignoreError::ConfigError(msg)) => assert!(msg.contains("`source`")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
