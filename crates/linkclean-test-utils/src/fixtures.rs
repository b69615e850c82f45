// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic clocks and sample image files.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use linkclean_core::Clock;
use linkclean_core::clock::format_date;

/// Clock frozen at a chosen instant; can be moved by hand.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicU64,
}

impl FixedClock {
    pub fn at(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Default for FixedClock {
    /// 2024-03-15T00:00:00Z
    fn default() -> Self {
        Self::at(1_710_460_800_000)
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }

    fn today(&self) -> String {
        format_date(self.now_millis())
    }
}

/// Bytes of a JPEG-looking file of exactly `len` bytes (minimum 6).
///
/// Starts with an SOI/APP0 marker, ends with EOI, and fills the middle with
/// a repeating pattern.
pub fn jpeg_bytes(len: usize) -> Vec<u8> {
    let len = len.max(6);
    let mut bytes = Vec::with_capacity(len);
    bytes.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);
    bytes.extend((0..len - 6).map(|i| (i % 251) as u8));
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes
}

/// Writes a [`jpeg_bytes`] file named `name` into `dir`.
pub fn write_jpeg(dir: &Path, name: &str, len: usize) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, jpeg_bytes(len))?;
    Ok(path)
}
