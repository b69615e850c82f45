// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage key names for the four content collections.

use strum::{Display, EnumIter, IntoEnumIterator};

/// One of the four independently persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Settings,
    Services,
    Portfolio,
    Inquiries,
}

impl Collection {
    pub fn all() -> impl Iterator<Item = Collection> {
        Self::iter()
    }
}

/// Durable key for each collection, sharing one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    prefix: String,
}

impl StoreKeys {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Key under which `collection` is stored, e.g. `lc_portfolio`.
    pub fn key(&self, collection: Collection) -> String {
        format!("{}{collection}", self.prefix)
    }
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::with_prefix("lc_")
    }
}
