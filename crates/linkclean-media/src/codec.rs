// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data URL encoding and decoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use linkclean_core::{ImageRef, LinkCleanError};

/// An image embedded as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data_url: String,
}

impl EncodedImage {
    /// The full `data:` URL.
    pub fn as_str(&self) -> &str {
        &self.data_url
    }

    /// The media type embedded in the URL.
    pub fn media_type(&self) -> &str {
        self.data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(media_type, _)| media_type)
            .unwrap_or_default()
    }

    /// Length of the encoded string in bytes.
    pub fn len(&self) -> usize {
        self.data_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_url.is_empty()
    }

    /// Decodes a base64 data URL back into media type and bytes.
    pub fn decode(data_url: &str) -> Result<DecodedImage, LinkCleanError> {
        let malformed = |reason: &str| LinkCleanError::ImageRead {
            message: format!("malformed data URL: {reason}"),
            source: None,
        };

        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| malformed("missing `data:` scheme"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| malformed("missing `,` separator"))?;
        let media_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| malformed("payload is not base64"))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| LinkCleanError::ImageRead {
                message: format!("invalid base64 payload: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(DecodedImage {
            media_type: media_type.to_string(),
            bytes,
        })
    }
}

impl From<EncodedImage> for ImageRef {
    fn from(image: EncodedImage) -> Self {
        ImageRef(image.data_url)
    }
}

/// Raw image bytes recovered from a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Encodes raw bytes under the given media type.
pub fn encode_bytes(media_type: &str, bytes: &[u8]) -> EncodedImage {
    let payload = STANDARD.encode(bytes);
    let mut data_url = String::with_capacity(media_type.len() + payload.len() + 13);
    data_url.push_str("data:");
    data_url.push_str(media_type);
    data_url.push_str(";base64,");
    data_url.push_str(&payload);
    EncodedImage { data_url }
}
