// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Link Clean content store.

use thiserror::Error;

/// The primary error type used across all Link Clean adapters and operations.
#[derive(Debug, Error)]
pub enum LinkCleanError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Durable storage errors (backend unavailable, write rejected).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A collection could not be encoded for the given storage key.
    #[error("failed to encode `{key}`: {source}")]
    Codec {
        key: String,
        source: serde_json::Error,
    },

    /// A selected image file could not be read or encoded.
    #[error("image read error: {message}")]
    ImageRead {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A draft failed validation at commit time. Nothing was written.
    #[error("validation failed: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    /// The remote inquiry relay rejected the submission or was unreachable.
    #[error("relay error: {message}")]
    Relay {
        message: String,
        status: Option<u16>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested adapter was not found.
    #[error("adapter not found: {adapter_type}/{name}")]
    AdapterNotFound { adapter_type: String, name: String },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LinkCleanError {
    /// Returns the validation errors if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// A single reason a draft cannot be committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,

    #[error("before image is required")]
    MissingBeforeImage,

    #[error("after image is required")]
    MissingAfterImage,

    /// An image upload for the draft has not completed yet.
    #[error("an image upload is still in progress")]
    UploadPending,

    #[error("{field} is required")]
    MissingField { field: &'static str },
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
