// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Link Clean site content store.
//!
//! This crate provides the entity types (settings, services, portfolio
//! entries, inquiries), their compiled-in seed values, the workspace error
//! type, and the adapter traits that storage backends and the inquiry relay
//! implement.

pub mod clock;
pub mod defaults;
pub mod error;
pub mod lucky_days;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use clock::{Clock, IdClock, SystemClock};
pub use error::{LinkCleanError, ValidationError};
pub use types::{
    AdapterType, HealthStatus, ImageRef, Inquiry, MajorCategory, PortfolioId, PortfolioItem,
    ServiceCategory, ServiceInfo, SettingsPatch, SiteSettings,
};

pub use traits::{Adapter, InquiryRelay, KeyValueStore};
