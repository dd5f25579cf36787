use std::time::Duration;

use serde::de::DeserializeOwned;
use shared::error::{ApiError, ErrorCode};
use shared::protocol::{AnalyticsSnapshot, InventoryItemSummary, OrderSummary};
use thiserror::Error;
use tracing::debug;

pub mod assistant;
pub mod sample;
pub mod stores;

pub use assistant::{AssistantBackend, AssistantReply, CannedAssistant, ASSISTANT_REPLY_DELAY};

/// Default bind address of the warehouse API gateway in development.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8090";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum WarehouseApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("warehouse API rejected {url}: {code:?}: {message}")]
    Api {
        url: String,
        code: ErrorCode,
        message: String,
    },
    #[error("unreadable payload from {url}: {source}")]
    Payload {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin read-only client for the warehouse API gateway.
#[derive(Debug, Clone)]
pub struct WarehouseApi {
    base_url: String,
    http: reqwest::Client,
}

impl WarehouseApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_inventory(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<InventoryItemSummary>, WarehouseApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        debug!(has_search = search.is_some(), "fetching inventory");
        self.get_json("api/inventory", &query).await
    }

    pub async fn fetch_orders(&self) -> Result<Vec<OrderSummary>, WarehouseApiError> {
        debug!("fetching orders");
        self.get_json("api/orders", &[]).await
    }

    pub async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot, WarehouseApiError> {
        debug!("fetching analytics snapshot");
        self.get_json("api/analytics/summary", &[]).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, WarehouseApiError> {
        let url = self.endpoint(path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| WarehouseApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (code, message) = decode_error_body(status, &body);
            return Err(WarehouseApiError::Api { url, code, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| WarehouseApiError::Payload { url, source })
    }
}

/// Gateway errors carry a structured body; anything else keeps the raw
/// body text alongside the status line.
fn decode_error_body(status: reqwest::StatusCode, body: &str) -> (ErrorCode, String) {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => (api_error.code, api_error.message),
        Err(_) => {
            let code = ErrorCode::from_status(status.as_u16());
            let trimmed = body.trim();
            let message = if trimmed.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {trimmed}")
            };
            (code, message)
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
