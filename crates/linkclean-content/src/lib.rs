// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content-mutation operations for the Link Clean site.
//!
//! Forms fill a draft ([`PortfolioDraft`], [`InquiryDraft`]); committing a
//! draft through [`ContentService`] validates it and writes the result to
//! the content store in one step.

pub mod drafts;
pub mod queries;
pub mod service;

pub use drafts::{
    GUEST_TITLE_PREFIX, ImageSlot, InquiryDraft, PortfolioDraft, SubmissionOrigin, UploadOutcome,
    UploadTicket,
};
pub use service::ContentService;
