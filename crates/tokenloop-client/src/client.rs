//! reqwest-backed implementation of [`ProtectApi`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use tokenloop_common::{ApiResponse, RunConfig};

use crate::ProtectApi;
use crate::error::ClientError;
use crate::wire::{ProtectBulkRequest, ProtectRequest, RevealBulkRequest, RevealRequest};

/// HTTP client for a protect/reveal tokenization service.
///
/// The four endpoint URLs are computed once at construction. One
/// underlying `reqwest::Client` is reused across all calls for connection
/// efficiency; all access is from the single control thread, so there is
/// no contention.
#[derive(Debug, Clone)]
pub struct HttpProtectClient {
    http: reqwest::Client,
    policy: String,
    protect_url: Url,
    reveal_url: Url,
    protect_bulk_url: Url,
    reveal_bulk_url: Url,
}

impl HttpProtectClient {
    /// Build a client from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigurationError`] when host and port do
    /// not form a valid base URL, or [`ClientError::NetworkError`] when
    /// the underlying HTTP client cannot be constructed.
    pub fn new(config: &RunConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&format!("http://{}:{}", config.host, config.port)).map_err(|e| {
            ClientError::ConfigurationError(format!(
                "invalid base URL for {}:{}: {e}",
                config.host, config.port
            ))
        })?;
        let endpoint = |path: &str| {
            base.join(path)
                .map_err(|e| ClientError::ConfigurationError(format!("invalid endpoint {path}: {e}")))
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            policy: config.policy.clone(),
            protect_url: endpoint("/v1/protect")?,
            reveal_url: endpoint("/v1/reveal")?,
            protect_bulk_url: endpoint("/v1/protectbulk")?,
            reveal_bulk_url: endpoint("/v1/revealbulk")?,
        })
    }

    /// POST a JSON payload and fold every outcome into an [`ApiResponse`].
    ///
    /// HTTP error statuses come back as ordinary responses with the body
    /// parsed as JSON when possible (raw text otherwise). Transport
    /// failures (refused connection, timeout, DNS) yield `status: None`
    /// with the error text as body, preserving any salvageable status.
    pub async fn post_json<B: Serialize + Sync>(&self, url: &Url, payload: &B) -> ApiResponse {
        let outcome = self
            .http
            .post(url.clone())
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await;

        let response = match outcome {
            Ok(response) => response,
            Err(error) => {
                warn!("request to {url} failed before a response arrived: {error}");
                return match error.status() {
                    // salvage whatever status the error still carries
                    Some(status) => ApiResponse::new(
                        Some(status.as_u16()),
                        Value::String(error.to_string()),
                    ),
                    None => ApiResponse::transport_failure(&error),
                };
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(text) => {
                debug!("{url} returned status {status}: {text}");
                let body = serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text));
                ApiResponse::new(Some(status), body)
            }
            Err(error) => {
                warn!("failed to read the response body from {url}: {error}");
                ApiResponse::new(Some(status), Value::String(error.to_string()))
            }
        }
    }
}

#[async_trait]
impl ProtectApi for HttpProtectClient {
    async fn protect(&self, data: &str) -> ApiResponse {
        let payload = ProtectRequest {
            protection_policy_name: &self.policy,
            data,
        };
        self.post_json(&self.protect_url, &payload).await
    }

    async fn reveal(&self, protected: &str) -> ApiResponse {
        let payload = RevealRequest {
            protection_policy_name: &self.policy,
            protected_data: protected,
        };
        self.post_json(&self.reveal_url, &payload).await
    }

    async fn protect_bulk(&self, items: &[String]) -> ApiResponse {
        let payload = ProtectBulkRequest {
            protection_policy_name: &self.policy,
            data: items,
            data_array: items,
        };
        self.post_json(&self.protect_bulk_url, &payload).await
    }

    async fn reveal_bulk(&self, protected: &[String]) -> ApiResponse {
        let payload = RevealBulkRequest::new(&self.policy, protected);
        self.post_json(&self.reveal_bulk_url, &payload).await
    }
}
