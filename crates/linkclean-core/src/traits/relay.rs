// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote inquiry relay trait.

use async_trait::async_trait;

use crate::error::LinkCleanError;
use crate::traits::adapter::Adapter;
use crate::types::Inquiry;

/// Delivers contact-form inquiries to the hosted form relay.
#[async_trait]
pub trait InquiryRelay: Adapter {
    /// Submits one inquiry. Success means the relay acknowledged it.
    ///
    /// No retry is attempted; the caller decides what a failure means.
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), LinkCleanError>;
}
