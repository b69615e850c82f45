// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end content tests.
//!
//! `TestHarness` wires a [`ContentService`] to a mock relay, a fixed clock
//! and either in-memory or temp-file SQLite storage.

use std::path::Path;
use std::sync::Arc;

use linkclean_config::StorageBackend;
use linkclean_config::model::StorageConfig;
use linkclean_content::ContentService;
use linkclean_core::{KeyValueStore, LinkCleanError};
use linkclean_storage::{ContentStore, StoreKeys};

use crate::fixtures::FixedClock;
use crate::mock_relay::MockRelay;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    backend: StorageBackend,
    prefix: String,
    clock_millis: Option<u64>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            backend: StorageBackend::Memory,
            prefix: "lc_".to_string(),
            clock_millis: None,
        }
    }

    /// Use a SQLite file in the harness temp directory.
    pub fn with_sqlite(mut self) -> Self {
        self.backend = StorageBackend::Sqlite;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Freeze the clock at `millis` since the epoch.
    pub fn with_clock(mut self, millis: u64) -> Self {
        self.clock_millis = Some(millis);
        self
    }

    pub async fn build(self) -> Result<TestHarness, LinkCleanError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| LinkCleanError::Storage { source: e.into() })?;

        let storage = StorageConfig {
            backend: self.backend,
            database_path: temp_dir.path().join("test.db").display().to_string(),
            key_prefix: self.prefix,
        };
        let kv = linkclean_storage::open_backend(&storage).await?;
        let keys = StoreKeys::with_prefix(storage.key_prefix.clone());

        let relay = Arc::new(MockRelay::new());
        let clock = Arc::new(match self.clock_millis {
            Some(millis) => FixedClock::at(millis),
            None => FixedClock::default(),
        });

        let store = ContentStore::open(kv.clone(), keys.clone()).await?;
        let service = ContentService::new(store, relay.clone(), clock.clone());

        Ok(TestHarness {
            relay,
            clock,
            kv,
            keys,
            service,
            temp_dir,
        })
    }
}

/// A content service over temp storage plus handles to its collaborators.
pub struct TestHarness {
    /// The mock inquiry relay.
    pub relay: Arc<MockRelay>,
    /// The clock new entries are stamped with.
    pub clock: Arc<FixedClock>,
    /// Raw backend, for inspecting or corrupting stored values.
    pub kv: Arc<dyn KeyValueStore>,
    pub keys: StoreKeys,
    /// The service under test.
    pub service: ContentService,
    /// Temp directory kept alive for cleanup on drop.
    temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Directory for scratch files such as sample images.
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Opens a second, independent store over the same backend, as a
    /// restarted process would.
    pub async fn reopen(&self) -> Result<ContentStore, LinkCleanError> {
        ContentStore::open(self.kv.clone(), self.keys.clone()).await
    }
}
