// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Write-through store owning the in-memory snapshot of all site content.
//!
//! Reads are synchronous and served from the snapshot. Every mutation
//! re-encodes and writes all four collections, then swaps the snapshot.
//! A failed write leaves the previous snapshot in place.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use linkclean_core::defaults::{
    initial_inquiries, initial_portfolio, initial_services, initial_settings,
};
use linkclean_core::{
    Inquiry, KeyValueStore, LinkCleanError, PortfolioItem, ServiceInfo, SiteSettings,
};

use crate::envelope::{self, DecodeError};
use crate::keys::{Collection, StoreKeys};

/// Current value of every collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub settings: SiteSettings,
    pub services: Vec<ServiceInfo>,
    pub portfolio: Vec<PortfolioItem>,
    pub inquiries: Vec<Inquiry>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            settings: initial_settings(),
            services: initial_services(),
            portfolio: initial_portfolio(),
            inquiries: initial_inquiries(),
        }
    }
}

/// Single-writer content store over a key/value backend.
///
/// Mutations take `&mut self`; share the store behind a lock if several
/// tasks need to write.
pub struct ContentStore {
    kv: Arc<dyn KeyValueStore>,
    keys: StoreKeys,
    snapshot: Snapshot,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("backend", &self.kv.name())
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Loads all four collections from `kv`.
    ///
    /// Absent or unusable values fall back to the compiled-in defaults.
    /// Nothing is written until the first mutation.
    pub async fn open(kv: Arc<dyn KeyValueStore>, keys: StoreKeys) -> Result<Self, LinkCleanError> {
        let snapshot = load_snapshot(kv.as_ref(), &keys).await?;
        info!(
            backend = kv.name(),
            prefix = keys.prefix(),
            portfolio = snapshot.portfolio.len(),
            inquiries = snapshot.inquiries.len(),
            "content store opened"
        );
        Ok(Self { kv, keys, snapshot })
    }

    /// Discards the in-memory snapshot and reads durable storage again.
    pub async fn reload(&mut self) -> Result<(), LinkCleanError> {
        self.snapshot = load_snapshot(self.kv.as_ref(), &self.keys).await?;
        debug!("content store reloaded");
        Ok(())
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.snapshot.settings
    }

    pub fn services(&self) -> &[ServiceInfo] {
        &self.snapshot.services
    }

    /// Portfolio entries, most recent first.
    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.snapshot.portfolio
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        &self.snapshot.inquiries
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    /// Name of the key/value backend in use.
    pub fn backend_name(&self) -> &str {
        self.kv.name()
    }

    pub async fn replace_settings(&mut self, settings: SiteSettings) -> Result<(), LinkCleanError> {
        let next = Snapshot {
            settings,
            ..self.snapshot.clone()
        };
        self.commit(next, Collection::Settings).await
    }

    pub async fn replace_services(&mut self, services: Vec<ServiceInfo>) -> Result<(), LinkCleanError> {
        let next = Snapshot {
            services,
            ..self.snapshot.clone()
        };
        self.commit(next, Collection::Services).await
    }

    pub async fn replace_portfolio(
        &mut self,
        portfolio: Vec<PortfolioItem>,
    ) -> Result<(), LinkCleanError> {
        let next = Snapshot {
            portfolio,
            ..self.snapshot.clone()
        };
        self.commit(next, Collection::Portfolio).await
    }

    pub async fn replace_inquiries(&mut self, inquiries: Vec<Inquiry>) -> Result<(), LinkCleanError> {
        let next = Snapshot {
            inquiries,
            ..self.snapshot.clone()
        };
        self.commit(next, Collection::Inquiries).await
    }

    /// Persists every collection of `next`, then makes it the live snapshot.
    ///
    /// The changed collection is written last, so a failure on it leaves
    /// durable storage holding only the previous values.
    async fn commit(&mut self, next: Snapshot, changed: Collection) -> Result<(), LinkCleanError> {
        let order = Collection::all()
            .filter(|c| *c != changed)
            .chain(std::iter::once(changed));

        let mut encoded = Vec::with_capacity(4);
        for collection in order {
            let key = self.keys.key(collection);
            let value = encode_collection(&next, collection, &key)?;
            encoded.push((key, value));
        }

        for (key, value) in &encoded {
            if let Err(e) = self.kv.set(key, value).await {
                warn!(key = %key, error = %e, "content write failed, keeping previous snapshot");
                return Err(e);
            }
        }

        debug!(
            changed = %changed,
            bytes = encoded.iter().map(|(_, v)| v.len()).sum::<usize>(),
            "content committed"
        );
        self.snapshot = next;
        Ok(())
    }
}

fn encode_collection(
    snapshot: &Snapshot,
    collection: Collection,
    key: &str,
) -> Result<String, LinkCleanError> {
    match collection {
        Collection::Settings => envelope::encode(key, &snapshot.settings),
        Collection::Services => envelope::encode(key, &snapshot.services),
        Collection::Portfolio => envelope::encode(key, &snapshot.portfolio),
        Collection::Inquiries => envelope::encode(key, &snapshot.inquiries),
    }
}

async fn load_snapshot(kv: &dyn KeyValueStore, keys: &StoreKeys) -> Result<Snapshot, LinkCleanError> {
    Ok(Snapshot {
        settings: load_or_default(kv, &keys.key(Collection::Settings), initial_settings).await?,
        services: load_or_default(kv, &keys.key(Collection::Services), initial_services).await?,
        portfolio: load_or_default(kv, &keys.key(Collection::Portfolio), initial_portfolio).await?,
        inquiries: load_or_default(kv, &keys.key(Collection::Inquiries), initial_inquiries).await?,
    })
}

/// Reads one key, decoding it or falling back to `default`.
///
/// Backend failures propagate; only missing or unusable values fall back.
async fn load_or_default<T, F>(
    kv: &dyn KeyValueStore,
    key: &str,
    default: F,
) -> Result<T, LinkCleanError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = kv.get(key).await? else {
        debug!(key, "no stored value, using defaults");
        return Ok(default());
    };

    match envelope::decode::<T>(&raw) {
        Ok(decoded) => {
            if decoded.version < envelope::SCHEMA_VERSION {
                debug!(key, version = decoded.version, "read value from older schema");
            }
            Ok(decoded.value)
        }
        Err(e @ DecodeError::UnsupportedVersion { .. }) => {
            warn!(key, error = %e, "stored value written by a newer build, using defaults");
            Ok(default())
        }
        Err(e) => {
            warn!(key, error = %e, "stored value unreadable, using defaults");
            Ok(default())
        }
    }
}
