// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait shared by storage backends and the inquiry relay.

use async_trait::async_trait;

use crate::error::LinkCleanError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for every pluggable Link Clean adapter.
///
/// Provides identity and a health probe so the `doctor` command can report
/// on whatever backends the configuration selected.
#[async_trait]
pub trait Adapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Returns the kind of adapter.
    fn adapter_type(&self) -> AdapterType;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, LinkCleanError>;
}
