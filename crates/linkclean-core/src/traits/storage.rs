// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable key/value storage trait.

use async_trait::async_trait;

use crate::error::LinkCleanError;
use crate::traits::adapter::Adapter;

/// A durable string key/value store scoped to one site installation.
///
/// Each key holds one complete encoded collection. Writes replace the whole
/// value; there is no partial update and no cross-key transaction.
#[async_trait]
pub trait KeyValueStore: Adapter {
    /// Reads the raw value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, LinkCleanError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), LinkCleanError>;

    /// Deletes `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), LinkCleanError>;
}
