// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite key/value backend.
//!
//! All statements run on tokio-rusqlite's single background thread, so the
//! one `Connection` held here is the only writer.

use std::path::Path;

use async_trait::async_trait;
use rusqlite::{OptionalExtension, params};
use tokio_rusqlite::Connection;
use tracing::debug;

use linkclean_core::{Adapter, AdapterType, HealthStatus, KeyValueStore, LinkCleanError};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS kv (
        key        TEXT PRIMARY KEY NOT NULL,
        value      TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );
";

fn storage_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> LinkCleanError {
    LinkCleanError::Storage {
        source: format!("sqlite: {e}").into(),
    }
}

/// Key/value store persisted in a single SQLite table.
pub struct SqliteKv {
    conn: Connection,
    location: String,
}

impl SqliteKv {
    /// Opens (or creates) the database file and ensures the table exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, LinkCleanError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| LinkCleanError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| LinkCleanError::Storage {
                source: Box::new(e),
            })?;
        let kv = Self {
            conn,
            location: path.display().to_string(),
        };
        kv.prepare(true).await?;
        debug!(path = %kv.location, "sqlite key/value store opened");
        Ok(kv)
    }

    /// Opens a private in-memory database.
    pub async fn open_in_memory() -> Result<Self, LinkCleanError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| LinkCleanError::Storage {
                source: Box::new(e),
            })?;
        let kv = Self {
            conn,
            location: ":memory:".to_string(),
        };
        kv.prepare(false).await?;
        Ok(kv)
    }

    /// Where the database lives (`:memory:` for in-memory databases).
    pub fn location(&self) -> &str {
        &self.location
    }

    async fn prepare(&self, wal: bool) -> Result<(), LinkCleanError> {
        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                if wal {
                    conn.pragma_update(None, "journal_mode", "WAL")?;
                    conn.pragma_update(None, "synchronous", "NORMAL")?;
                }
                conn.execute_batch(SCHEMA)
            })
            .await
            .map_err(storage_err)
    }

    /// Checkpoints the WAL and closes the connection.
    pub async fn close(self) -> Result<(), LinkCleanError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
            })
            .await
            .map_err(storage_err)?;
        self.conn.close().await.map_err(storage_err)?;
        debug!(path = %self.location, "sqlite key/value store closed");
        Ok(())
    }
}

#[async_trait]
impl Adapter for SqliteKv {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::KeyValue
    }

    async fn health_check(&self) -> Result<HealthStatus, LinkCleanError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> { conn.execute_batch("SELECT 1;") })
            .await
            .map_err(storage_err)?;
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl KeyValueStore for SqliteKv {
    async fn get(&self, key: &str) -> Result<Option<String>, LinkCleanError> {
        let key = key.to_string();
        self.conn
            .call(move |conn| -> Result<Option<String>, rusqlite::Error> {
                conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                    row.get(0)
                })
                .optional()
            })
            .await
            .map_err(storage_err)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), LinkCleanError> {
        let key = key.to_string();
        let value = value.to_string();
        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                conn.execute(
                    "INSERT INTO kv (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET
                         value = excluded.value,
                         updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                    params![key, value],
                )?;
                Ok(())
            })
            .await
            .map_err(storage_err)
    }

    async fn remove(&self, key: &str) -> Result<(), LinkCleanError> {
        let key = key.to_string();
        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
                Ok(())
            })
            .await
            .map_err(storage_err)
    }
}
