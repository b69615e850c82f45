// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Link Clean content store.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Link Clean configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LinkCleanConfig {
    /// Durable storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Remote inquiry relay settings.
    #[serde(default)]
    pub relay: RelayConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which key/value backend holds the content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite file at `storage.database_path`.
    #[default]
    Sqlite,
    /// Process memory only; nothing survives a restart.
    Memory,
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Prefix prepended to the four collection keys.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_path: default_database_path(),
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("linkclean").join("linkclean.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "linkclean.db".to_string())
}

fn default_key_prefix() -> String {
    "lc_".to_string()
}

/// Remote inquiry relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    /// Submit inquiries to the relay. When false, submissions fail.
    #[serde(default = "default_relay_enabled")]
    pub enabled: bool,

    /// Form relay endpoint receiving the JSON POST.
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_relay_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: default_relay_enabled(),
            endpoint: default_relay_endpoint(),
            timeout_secs: default_relay_timeout_secs(),
        }
    }
}

fn default_relay_enabled() -> bool {
    true
}

fn default_relay_endpoint() -> String {
    "https://formspree.io/f/xgokkpaj".to_string()
}

fn default_relay_timeout_secs() -> u64 {
    15
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_production_relay() {
        let config = LinkCleanConfig::default();
        assert_eq!(config.relay.endpoint, "https://formspree.io/f/xgokkpaj");
        assert!(config.relay.enabled);
        assert_eq!(config.relay.timeout_secs, 15);
        assert_eq!(config.storage.key_prefix, "lc_");
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn backend_parses_lowercase_names() {
        let config: LinkCleanConfig = toml::from_str("[storage]\nbackend = \"memory\"\n").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result: Result<LinkCleanConfig, _> = toml::from_str("[storage]\nbackend = \"redis\"\n");
        assert!(result.is_err());
    }
}
