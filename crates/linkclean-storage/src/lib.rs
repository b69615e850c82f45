// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent content store for Link Clean.
//!
//! [`ContentStore`] keeps the live snapshot of settings, services, portfolio
//! and inquiries, writing through to a [`KeyValueStore`] backend on every
//! change. Two backends are provided: [`SqliteKv`] for durable storage and
//! [`MemoryKv`] for tests and previews.

pub mod envelope;
pub mod keys;
pub mod memory;
pub mod sqlite;
pub mod store;

use std::sync::Arc;

use linkclean_config::StorageBackend;
use linkclean_config::model::StorageConfig;
use linkclean_core::{KeyValueStore, LinkCleanError};

pub use keys::{Collection, StoreKeys};
pub use memory::MemoryKv;
pub use sqlite::SqliteKv;
pub use store::{ContentStore, Snapshot};

/// Opens the backend selected by `config`.
pub async fn open_backend(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, LinkCleanError> {
    match config.backend {
        StorageBackend::Sqlite => {
            let kv = SqliteKv::open(&config.database_path).await?;
            Ok(Arc::new(kv))
        }
        StorageBackend::Memory => Ok(Arc::new(MemoryKv::new())),
    }
}

/// Opens the configured backend and loads a [`ContentStore`] from it.
pub async fn open_store(config: &StorageConfig) -> Result<ContentStore, LinkCleanError> {
    let kv = open_backend(config).await?;
    ContentStore::open(kv, StoreKeys::with_prefix(config.key_prefix.clone())).await
}
