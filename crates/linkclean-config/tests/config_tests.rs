// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Link Clean configuration system.

use linkclean_config::diagnostic::ConfigError;
use linkclean_config::model::StorageBackend;
use linkclean_config::{
    load_and_validate_path, load_and_validate_str, load_config, load_config_from_str,
};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[storage]
backend = "sqlite"
database_path = "/tmp/linkclean.db"
key_prefix = "site_"

[relay]
enabled = true
endpoint = "https://relay.example.com/f/abc"
timeout_secs = 5

[logging]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    assert_eq!(config.storage.database_path, "/tmp/linkclean.db");
    assert_eq!(config.storage.key_prefix, "site_");
    assert_eq!(config.relay.endpoint, "https://relay.example.com/f/abc");
    assert_eq!(config.relay.timeout_secs, 5);
    assert_eq!(config.logging.level, "debug");
}

/// Missing sections fall back to compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    assert_eq!(config.storage.key_prefix, "lc_");
    assert!(config.relay.enabled);
    assert_eq!(config.relay.endpoint, "https://formspree.io/f/xgokkpaj");
    assert_eq!(config.logging.level, "info");
}

/// A typo in a key is reported with a suggestion.
#[test]
fn unknown_key_gets_a_suggestion() {
    let toml = r#"
[relay]
endpiont = "https://relay.example.com"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let suggestion = errors.iter().find_map(|e| match e {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } if key == "endpiont" => suggestion.clone(),
        _ => None,
    });
    assert_eq!(suggestion.as_deref(), Some("endpoint"));
}

/// A wrongly typed value is reported as an invalid type.
#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[relay]
timeout_secs = "soon"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject string timeout");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. })),
        "expected an invalid type error, got: {errors:?}"
    );
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_through_load_and_validate() {
    let toml = r#"
[relay]
endpoint = "ftp://relay.example.com"
"#;

    let errors = load_and_validate_str(toml).expect_err("ftp endpoint should fail");
    assert!(matches!(&errors[0], ConfigError::Validation { message } if message.contains("relay.endpoint")));
}

/// An explicit file is loaded and validated.
#[test]
fn explicit_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkclean.toml");
    std::fs::write(&path, "[storage]\nbackend = \"memory\"\n").unwrap();

    let config = load_and_validate_path(&path).expect("file config should validate");
    assert_eq!(config.storage.backend, StorageBackend::Memory);
}

/// Environment variables override the local file and map underscores correctly.
#[test]
fn env_vars_override_local_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "linkclean.toml",
            r#"
[storage]
key_prefix = "from_file_"

[relay]
timeout_secs = 30
"#,
        )?;
        jail.set_env("LINKCLEAN_RELAY_TIMEOUT_SECS", "7");
        jail.set_env("LINKCLEAN_STORAGE_KEY_PREFIX", "env_");
        jail.set_env("LINKCLEAN_LOGGING_LEVEL", "warn");

        let config = load_config()?;
        assert_eq!(config.relay.timeout_secs, 7);
        assert_eq!(config.storage.key_prefix, "env_");
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}
