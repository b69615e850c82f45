// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Asynchronous single-shot reads of selected image files.

use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use linkclean_core::LinkCleanError;

use crate::codec::{EncodedImage, encode_bytes};
use crate::sniff::media_type_for;

/// Reads the whole file and encodes it as a data URL.
///
/// The caller suspends until the file is fully in memory. Any I/O failure
/// is reported as [`LinkCleanError::ImageRead`].
pub async fn encode_file(path: impl AsRef<Path>) -> Result<EncodedImage, LinkCleanError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| LinkCleanError::ImageRead {
            message: format!("cannot read {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;

    let media_type = media_type_for(path, &bytes);
    debug!(path = %path.display(), media_type, bytes = bytes.len(), "image file read");
    Ok(encode_bytes(media_type, &bytes))
}

/// Drains `reader` and encodes its contents under `media_type`.
pub async fn encode_reader<R>(mut reader: R, media_type: &str) -> Result<EncodedImage, LinkCleanError>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(|e| LinkCleanError::ImageRead {
            message: format!("image stream failed: {e}"),
            source: Some(Box::new(e)),
        })?;
    Ok(encode_bytes(media_type, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg_bytes(len: usize) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        bytes.resize(len, 0x42);
        bytes
    }

    #[tokio::test]
    async fn encodes_a_two_megabyte_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("before.jpg");
        let bytes = jpeg_bytes(2 * 1024 * 1024);
        tokio::fs::write(&path, &bytes).await.unwrap();

        let image = encode_file(&path).await.unwrap();
        assert_eq!(image.media_type(), "image/jpeg");
        let decoded = EncodedImage::decode(image.as_str()).unwrap();
        assert_eq!(decoded.bytes.len(), bytes.len());
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_file(dir.path().join("nope.png")).await.unwrap_err();
        assert!(matches!(err, LinkCleanError::ImageRead { .. }));
    }

    #[tokio::test]
    async fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_file(dir.path()).await.unwrap_err();
        assert!(matches!(err, LinkCleanError::ImageRead { .. }));
    }

    #[tokio::test]
    async fn reader_input_uses_given_media_type() {
        let image = encode_reader(&b"abc"[..], "image/webp").await.unwrap();
        assert_eq!(image.as_str(), "data:image/webp;base64,YWJj");
    }
}
