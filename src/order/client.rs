//! HTTP client for the Bloom Pizza order API

use super::error::{SubmissionError, SUBMISSION_FAILED_MESSAGE};
use super::traits::OrderApi;
use crate::config::OrderConfig;
use crate::state::FormValues;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Default API address
pub const DEFAULT_BASE_URL: &str = "http://localhost:9009";

/// Environment variable overriding the configured API address
pub const BASE_URL_ENV: &str = "BLOOM_PIZZA_API_URL";

/// Banner text when a successful response carries no message
pub const ORDER_RECEIVED_MESSAGE: &str = "Order received";

/// Body of both success and failure responses
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Pull `message` out of a JSON response body
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

/// Pick the API address: environment first, then config, then the default
fn resolve_base_url(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|s| !s.is_empty())
        .or_else(|| configured.filter(|s| !s.is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Client for placing orders
pub struct OrderClient {
    client: Client,
    base_url: String,
}

impl OrderClient {
    /// Create a client from user configuration
    pub fn new(config: &OrderConfig) -> Self {
        let base_url = resolve_base_url(
            std::env::var(BASE_URL_ENV).ok(),
            config.api_base_url.as_deref(),
        );
        Self::with_base_url(base_url)
    }

    /// Create a client talking to `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: resolve_base_url(None, Some(&base_url)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn order_url(&self) -> String {
        format!("{}/api/order", self.base_url)
    }
}

#[async_trait]
impl OrderApi for OrderClient {
    async fn submit_order(&self, order: &FormValues) -> Result<String, SubmissionError> {
        let url = self.order_url();
        tracing::debug!("POST {url}");

        let response = self.client.post(&url).json(order).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            return Ok(extract_message(&body).unwrap_or_else(|| ORDER_RECEIVED_MESSAGE.to_string()));
        }

        let message = extract_message(&body).unwrap_or_else(|| {
            tracing::warn!("Order rejected with status {status} and no message: {body:?}");
            SUBMISSION_FAILED_MESSAGE.to_string()
        });
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
