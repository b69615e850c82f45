// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the hosted contact-form relay.
//!
//! Provides [`FormRelayClient`], which posts each inquiry as JSON and treats
//! any 2xx status as delivered. Failures are returned once, never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, info, warn};

use linkclean_core::{Adapter, AdapterType, HealthStatus, Inquiry, InquiryRelay, LinkCleanError};

use crate::types::RelayErrorResponse;

/// Relay client bound to one form endpoint.
#[derive(Debug, Clone)]
pub struct FormRelayClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl FormRelayClient {
    /// Creates a client posting to `endpoint`.
    ///
    /// # Arguments
    /// * `endpoint` - Full form URL, e.g. `https://formspree.io/f/<id>`
    /// * `timeout` - Upper bound for one submission round trip
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LinkCleanError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| LinkCleanError::Relay {
                message: format!("failed to build HTTP client: {e}"),
                status: None,
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, e: reqwest::Error) -> LinkCleanError {
        let message = if e.is_timeout() {
            format!("relay did not answer within {:?}", self.timeout)
        } else {
            format!("HTTP request failed: {e}")
        };
        LinkCleanError::Relay {
            message,
            status: None,
            source: Some(Box::new(e)),
        }
    }
}

#[async_trait]
impl Adapter for FormRelayClient {
    fn name(&self) -> &str {
        "form-relay"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Relay
    }

    /// Reports configuration health only; probing the endpoint would
    /// count against the form's submission quota.
    async fn health_check(&self) -> Result<HealthStatus, LinkCleanError> {
        match reqwest::Url::parse(&self.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(HealthStatus::Healthy),
            Ok(url) => Ok(HealthStatus::Unhealthy(format!(
                "unsupported scheme `{}`",
                url.scheme()
            ))),
            Err(e) => Ok(HealthStatus::Unhealthy(format!("invalid endpoint: {e}"))),
        }
    }
}

#[async_trait]
impl InquiryRelay for FormRelayClient {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), LinkCleanError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(inquiry)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(status = %status, "relay response received");

        if status.is_success() {
            info!(service_type = %inquiry.service_type, "inquiry delivered to relay");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<RelayErrorResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.summary());
        let message = match detail {
            Some(detail) => format!("relay rejected inquiry ({status}): {detail}"),
            None => format!("relay returned {status}"),
        };
        warn!(status = %status, "inquiry rejected by relay");

        Err(LinkCleanError::Relay {
            message,
            status: Some(status.as_u16()),
            source: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkclean_core::ServiceCategory;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> FormRelayClient {
        FormRelayClient::new(format!("{base_url}/f/test"), Duration::from_secs(5)).unwrap()
    }

    fn kim() -> Inquiry {
        Inquiry {
            name: "Kim".into(),
            phone: "010-0000-0000".into(),
            service_type: ServiceCategory::MoveIn,
            message: "test".into(),
        }
    }

    #[tokio::test]
    async fn submit_posts_inquiry_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/f/test"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(body_json(serde_json::json!({
                "name": "Kim",
                "phone": "010-0000-0000",
                "serviceType": "입주청소",
                "message": "test"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client.submit(&kim()).await.unwrap();
    }

    #[tokio::test]
    async fn any_2xx_counts_as_delivered() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert!(client.submit(&kim()).await.is_ok());
    }

    #[tokio::test]
    async fn server_error_is_reported_without_retry() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.submit(&kim()).await.unwrap_err();
        assert!(
            matches!(err, LinkCleanError::Relay { status: Some(500), .. }),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn rejection_detail_is_included() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "errors": [{"field": "phone", "message": "should be a phone number"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.submit(&kim()).await.unwrap_err().to_string();
        assert!(err.contains("should be a phone number"), "got: {err}");
    }

    #[tokio::test]
    async fn slow_relay_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client =
            FormRelayClient::new(format!("{}/f/test", server.uri()), Duration::from_millis(50))
                .unwrap();
        let err = client.submit(&kim()).await.unwrap_err();
        match err {
            LinkCleanError::Relay {
                status: None,
                ref message,
                ..
            } => assert!(message.contains("did not answer within 50ms"), "got: {message}"),
            other => panic!("expected relay transport error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_relay_is_a_transport_failure() {
        // Port 9 (discard) on localhost is not listening in test environments.
        let client =
            FormRelayClient::new("http://127.0.0.1:9/f/test", Duration::from_secs(2)).unwrap();
        let err = client.submit(&kim()).await.unwrap_err();
        assert!(
            matches!(err, LinkCleanError::Relay { status: None, .. }),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn health_check_flags_bad_endpoints() {
        let good = FormRelayClient::new("https://formspree.io/f/x", Duration::from_secs(1)).unwrap();
        assert_eq!(good.health_check().await.unwrap(), HealthStatus::Healthy);

        let bad = FormRelayClient::new("not a url", Duration::from_secs(1)).unwrap();
        assert!(matches!(
            bad.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));
    }
}
