//! Remote hosted-backend client.
//!
//! Speaks the hosted backend's REST dialect: equality filters as
//! `column=eq.value` query parameters, single-column ordering as
//! `order=column.asc|desc`, optional `select` projection, and inserts that
//! return the stored representation. Credentials ride along as `apikey` and
//! bearer headers when configured.
//!
//! Failures are terminal for the operation: the client makes a single
//! attempt per call and reports a structured backend error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};
use trackboard_core::query::ports::CollectionStore;
use trackboard_core::CollectionQuery;
use trackboard_domain::{Result, TrackboardError};

use crate::http::HttpClient;

/// Configuration for the remote backend client.
#[derive(Debug, Clone)]
pub struct RemoteBackendConfig {
    /// Base URL of the hosted backend (e.g. "https://example.backend.co").
    pub base_url: String,
    /// API key sent as `apikey` and bearer token when present.
    pub api_key: Option<String>,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// Attempts per call. One by default: failures are terminal.
    pub max_attempts: usize,
}

impl Default for RemoteBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_attempts: 1,
        }
    }
}

/// HTTP client for the hosted backend's table interface.
pub struct RemoteBackend {
    http: HttpClient,
    config: RemoteBackendConfig,
}

impl RemoteBackend {
    pub fn new(config: RemoteBackendConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .build()?;
        Ok(Self { http, config })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{collection}", self.config.base_url.trim_end_matches('/'))
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => {
                builder.header("apikey", key).header(AUTHORIZATION, format!("Bearer {key}"))
            }
            None => builder,
        }
    }

    fn query_params(query: &CollectionQuery) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(select) = &query.select {
            params.push(("select".to_string(), select.clone()));
        }

        for (field, value) in query.active_filters() {
            params.push((field.to_string(), format!("eq.{value}")));
        }

        if let Some(order) = &query.order_by {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{}.{direction}", order.column)));
        }

        params
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = self.http.send(builder).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = decode_error_message(&body).unwrap_or_else(|| body.clone());

        if status == StatusCode::NOT_FOUND {
            Err(TrackboardError::NotFound(message))
        } else {
            Err(TrackboardError::Backend(format!("{status}: {message}")))
        }
    }
}

/// Pull a human-readable message out of an error body when the backend sent
/// a structured one.
fn decode_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error", "hint"] {
        if let Some(message) = value.get(key).and_then(Value::as_str) {
            return Some(message.to_string());
        }
    }
    None
}

#[async_trait]
impl CollectionStore for RemoteBackend {
    #[instrument(skip(self, query), fields(collection = %collection))]
    async fn select(&self, collection: &str, query: &CollectionQuery) -> Result<Vec<Value>> {
        let url = self.collection_url(collection);
        let params = Self::query_params(query);

        debug!(url = %url, params = params.len(), "selecting collection rows");

        let builder = self.authed(self.http.request(Method::GET, &url).query(&params));
        let response = self.execute(builder).await?;

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|err| TrackboardError::Serialization(err.to_string()))
    }

    #[instrument(skip(self, row), fields(collection = %collection))]
    async fn insert(&self, collection: &str, row: Value) -> Result<Value> {
        let url = self.collection_url(collection);

        debug!(url = %url, "inserting collection row");

        let builder = self
            .authed(self.http.request(Method::POST, &url))
            .header("Prefer", "return=representation")
            .json(&row);
        let response = self.execute(builder).await?;

        let stored: Value = response
            .json()
            .await
            .map_err(|err| TrackboardError::Serialization(err.to_string()))?;

        // Representation comes back as a one-element array.
        match stored {
            Value::Array(mut rows) if !rows.is_empty() => Ok(rows.remove(0)),
            other => Ok(other),
        }
    }
}
