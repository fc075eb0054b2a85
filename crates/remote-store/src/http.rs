//! HTTP implementation of [`ApiTransport`] over `reqwest`.
//!
//! One instance is built per authenticated surface (public or admin) with a base URL
//! and an optional bearer token injected as a default header, so individual stores
//! never handle authentication themselves.

use crate::transport::{ApiTransport, Query, TransportError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Response, StatusCode};
use serde_json::Value;

/// Shared HTTP client with base URL and default-header auth injection.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport for `base_url`, attaching `Authorization: Bearer <token>`
    /// to every request when a token is given.
    pub fn new(base_url: impl Into<String>, token: Option<&str>) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| TransportError::Network(format!("invalid auth token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Network(format!("failed to create HTTP client: {e}")))?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response(&self, response: Response) -> Result<Value, TransportError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "response ok");
            return Ok(body);
        }

        let message = server_message(status, &body);
        tracing::debug!(status = status.as_u16(), %message, "response rejected");
        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Extracts a displayable message from an error response body.
///
/// Preference order: top-level `message`, then a flattened join of the per-field
/// `errors` map, then a status-derived fallback.
fn server_message(status: StatusCode, body: &Value) -> String {
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        if !message.is_empty() {
            return message.to_string();
        }
    }

    if let Some(errors) = body.get("errors").and_then(Value::as_object) {
        let mut parts = Vec::new();
        for value in errors.values() {
            match value {
                Value::String(s) => parts.push(s.clone()),
                Value::Array(items) => {
                    parts.extend(items.iter().filter_map(Value::as_str).map(String::from));
                }
                _ => {}
            }
        }
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    format!("request failed with status {}", status.as_u16())
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str, query: &Query) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        self.handle_response(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        self.handle_response(response).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        self.handle_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<Value, TransportError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        self.handle_response(response).await
    }
}
