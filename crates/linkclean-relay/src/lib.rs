// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inquiry relay adapters for Link Clean.
//!
//! The hosted form relay receives each contact-form inquiry as a JSON POST.
//! When the relay is switched off in configuration, [`DisabledRelay`] takes
//! its place and refuses every submission.

pub mod client;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use linkclean_config::model::RelayConfig;
use linkclean_core::{Adapter, AdapterType, HealthStatus, Inquiry, InquiryRelay, LinkCleanError};

pub use client::FormRelayClient;

/// Stand-in relay used when delivery is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRelay;

#[async_trait]
impl Adapter for DisabledRelay {
    fn name(&self) -> &str {
        "disabled-relay"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Relay
    }

    async fn health_check(&self) -> Result<HealthStatus, LinkCleanError> {
        Ok(HealthStatus::Degraded("relay disabled in configuration".into()))
    }
}

#[async_trait]
impl InquiryRelay for DisabledRelay {
    async fn submit(&self, _inquiry: &Inquiry) -> Result<(), LinkCleanError> {
        Err(LinkCleanError::Relay {
            message: "inquiry relay is disabled".into(),
            status: None,
            source: None,
        })
    }
}

/// Builds the relay described by `config`.
pub fn relay_from_config(config: &RelayConfig) -> Result<Arc<dyn InquiryRelay>, LinkCleanError> {
    if !config.enabled {
        tracing::info!("inquiry relay disabled");
        return Ok(Arc::new(DisabledRelay));
    }
    let client = FormRelayClient::new(
        config.endpoint.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkclean_core::ServiceCategory;

    #[test]
    fn enabled_config_builds_form_client() {
        let relay = relay_from_config(&RelayConfig::default()).unwrap();
        assert_eq!(relay.name(), "form-relay");
        assert_eq!(relay.adapter_type(), AdapterType::Relay);
    }

    #[tokio::test]
    async fn disabled_relay_refuses_submissions() {
        let config = RelayConfig {
            enabled: false,
            ..RelayConfig::default()
        };
        let relay = relay_from_config(&config).unwrap();
        let inquiry = Inquiry {
            name: "Park".into(),
            phone: "010-2222-3333".into(),
            service_type: ServiceCategory::FloorWax,
            message: String::new(),
        };
        assert!(matches!(
            relay.submit(&inquiry).await,
            Err(LinkCleanError::Relay { .. })
        ));
        assert!(matches!(
            relay.health_check().await.unwrap(),
            HealthStatus::Degraded(_)
        ));
    }
}
