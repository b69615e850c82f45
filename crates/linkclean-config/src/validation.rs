// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde attributes cannot express, such as a
//! usable relay URL or a whitespace-free key prefix.

use crate::diagnostic::ConfigError;
use crate::model::{LinkCleanConfig, StorageBackend};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &LinkCleanConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if config.storage.backend == StorageBackend::Sqlite
        && config.storage.database_path.trim().is_empty()
    {
        fail("storage.database_path must not be empty when backend is sqlite".to_string());
    }

    if config.storage.key_prefix.chars().any(char::is_whitespace) {
        fail(format!(
            "storage.key_prefix `{}` must not contain whitespace",
            config.storage.key_prefix
        ));
    }

    if config.relay.enabled {
        let endpoint = config.relay.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            fail(format!(
                "relay.endpoint `{endpoint}` must be an http:// or https:// URL"
            ));
        }
    }

    if config.relay.timeout_secs == 0 {
        fail("relay.timeout_secs must be at least 1".to_string());
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "logging.level `{}` is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
