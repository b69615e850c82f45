// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./linkclean.toml` > `~/.config/linkclean/linkclean.toml`
//! > `/etc/linkclean/linkclean.toml` with environment variable overrides via
//! the `LINKCLEAN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::LinkCleanConfig;

/// Local config file name, also used under the XDG and system directories.
pub const CONFIG_FILE: &str = "linkclean.toml";

/// System-wide config file location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/linkclean/linkclean.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/linkclean/linkclean.toml` (system-wide)
/// 3. `~/.config/linkclean/linkclean.toml` (user XDG config)
/// 4. `./linkclean.toml` (local directory)
/// 5. `LINKCLEAN_*` environment variables
pub fn load_config() -> Result<LinkCleanConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LinkCleanConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LinkCleanConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LinkCleanConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LinkCleanConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(LinkCleanConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("linkclean").join(CONFIG_FILE))
                .unwrap_or_default(),
        ))
        .merge(Toml::file(CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `LINKCLEAN_STORAGE_KEY_PREFIX` must map to
/// `storage.key_prefix`, not `storage.key.prefix`.
fn env_provider() -> Env {
    Env::prefixed("LINKCLEAN_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a lowercased, prefix-stripped env var name to its dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    key.replacen("storage_", "storage.", 1)
        .replacen("relay_", "relay.", 1)
        .replacen("logging_", "logging.", 1)
}
