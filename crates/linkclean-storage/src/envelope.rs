// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Versioned encoding of stored collections.
//!
//! Every key holds `{"version": N, "data": <collection>}`. A value without
//! that wrapper is the unversioned layout written before schema versions
//! existed and is read as version 0 with the same data shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use linkclean_core::LinkCleanError;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Why a stored value could not be used.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("stored value is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("stored schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("stored value has an unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    version: u32,
    data: serde_json::Value,
}

/// Encodes a collection under the current schema version.
pub fn encode<T: Serialize>(key: &str, value: &T) -> Result<String, LinkCleanError> {
    serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        data: value,
    })
    .map_err(|source| LinkCleanError::Codec {
        key: key.to_string(),
        source,
    })
}

/// A decoded collection together with the schema version it was stored at.
#[derive(Debug, PartialEq)]
pub struct Decoded<T> {
    pub version: u32,
    pub value: T,
}

/// Decodes a stored value written at this or any earlier schema version.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<Decoded<T>, DecodeError> {
    let json: serde_json::Value = serde_json::from_str(raw).map_err(DecodeError::Malformed)?;

    let (version, data) = match serde_json::from_value::<Envelope>(json.clone()) {
        Ok(envelope) => (envelope.version, envelope.data),
        Err(_) => (0, json),
    };

    if version > SCHEMA_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    let value = serde_json::from_value(data).map_err(DecodeError::Shape)?;
    Ok(Decoded { version, value })
}
