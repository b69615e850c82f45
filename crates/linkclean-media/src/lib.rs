// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Encoded-image codec for portfolio photo uploads.
//!
//! Turns a selected image file into a self-describing
//! `data:<media-type>;base64,<payload>` string that can be stored as a plain
//! string and used directly as an image source. Reading is asynchronous and
//! single-shot; there is no size or type validation and no retry.

pub mod codec;
pub mod read;
pub mod sniff;

pub use codec::{DecodedImage, EncodedImage, encode_bytes};
pub use read::{encode_file, encode_reader};
pub use sniff::{FALLBACK_MEDIA_TYPE, media_type_for, sniff_media_type};
