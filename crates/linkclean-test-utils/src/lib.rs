// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Link Clean integration tests.
//!
//! Provides mock adapters and a harness for fast, deterministic tests that
//! never touch the network.
//!
//! # Components
//!
//! - [`MockRelay`] - inquiry relay with scripted outcomes and capture
//! - [`FailingKv`] - key/value store with injected read and write failures
//! - [`FixedClock`] - clock frozen at a chosen instant
//! - [`TestHarness`] - content service wired to temp or in-memory storage

pub mod failing_kv;
pub mod fixtures;
pub mod harness;
pub mod mock_relay;

pub use failing_kv::FailingKv;
pub use fixtures::{FixedClock, jpeg_bytes, write_jpeg};
pub use harness::TestHarness;
pub use mock_relay::MockRelay;
