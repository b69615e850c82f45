// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value store with switchable failures.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use linkclean_core::{Adapter, AdapterType, HealthStatus, KeyValueStore, LinkCleanError};

/// In-memory store whose reads or writes can be made to fail per key.
///
/// Simulates a full or broken browser storage area.
#[derive(Debug, Default)]
pub struct FailingKv {
    entries: Mutex<HashMap<String, String>>,
    failing_writes: Mutex<HashSet<String>>,
    failing_reads: Mutex<HashSet<String>>,
}

impl FailingKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `set` of `key` fail.
    pub async fn fail_writes_to(&self, key: impl Into<String>) {
        self.failing_writes.lock().await.insert(key.into());
    }

    /// Makes every later `get` of `key` fail.
    pub async fn fail_reads_of(&self, key: impl Into<String>) {
        self.failing_reads.lock().await.insert(key.into());
    }

    pub async fn heal(&self) {
        self.failing_writes.lock().await.clear();
        self.failing_reads.lock().await.clear();
    }

    /// Raw stored value, bypassing failure injection.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }
}

fn injected(op: &str, key: &str) -> LinkCleanError {
    LinkCleanError::Storage {
        source: format!("injected {op} failure for `{key}`").into(),
    }
}

#[async_trait]
impl Adapter for FailingKv {
    fn name(&self) -> &str {
        "failing"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::KeyValue
    }

    async fn health_check(&self) -> Result<HealthStatus, LinkCleanError> {
        if self.failing_writes.lock().await.is_empty() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded("writes are failing".into()))
        }
    }
}

#[async_trait]
impl KeyValueStore for FailingKv {
    async fn get(&self, key: &str) -> Result<Option<String>, LinkCleanError> {
        if self.failing_reads.lock().await.contains(key) {
            return Err(injected("read", key));
        }
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), LinkCleanError> {
        if self.failing_writes.lock().await.contains(key) {
            return Err(injected("write", key));
        }
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), LinkCleanError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
