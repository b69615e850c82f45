// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock inquiry relay for deterministic testing.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use linkclean_core::{Adapter, AdapterType, HealthStatus, Inquiry, InquiryRelay, LinkCleanError};

/// Relay that records deliveries and answers from a script.
///
/// Scripted outcomes are popped in order; once the script runs out every
/// submission succeeds.
#[derive(Debug, Default)]
pub struct MockRelay {
    script: Mutex<VecDeque<Option<u16>>>,
    delivered: Mutex<Vec<Inquiry>>,
    attempts: Mutex<usize>,
}

impl MockRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful delivery.
    pub async fn push_success(&self) {
        self.script.lock().await.push_back(None);
    }

    /// Queues a rejection with the given HTTP status.
    pub async fn push_failure(&self, status: u16) {
        self.script.lock().await.push_back(Some(status));
    }

    /// Inquiries the relay accepted, in order.
    pub async fn delivered(&self) -> Vec<Inquiry> {
        self.delivered.lock().await.clone()
    }

    /// Number of submissions seen, accepted or not.
    pub async fn attempts(&self) -> usize {
        *self.attempts.lock().await
    }
}

#[async_trait]
impl Adapter for MockRelay {
    fn name(&self) -> &str {
        "mock-relay"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Relay
    }

    async fn health_check(&self) -> Result<HealthStatus, LinkCleanError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl InquiryRelay for MockRelay {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), LinkCleanError> {
        *self.attempts.lock().await += 1;
        match self.script.lock().await.pop_front().flatten() {
            Some(status) => Err(LinkCleanError::Relay {
                message: format!("relay returned {status}"),
                status: Some(status),
                source: None,
            }),
            None => {
                self.delivered.lock().await.push(inquiry.clone());
                Ok(())
            }
        }
    }
}
