//! # Transport Abstraction
//!
//! Stores never talk to the network directly; they go through the [`ApiTransport`]
//! trait. Production code plugs in [`HttpTransport`](crate::HttpTransport), tests plug
//! in [`MockTransport`](crate::mock::MockTransport). Keeping this seam a trait is what
//! makes every store testable without a server.

use async_trait::async_trait;
use serde_json::Value;

/// Query parameters for list endpoints: free-form key/value pairs.
pub type Query = [(String, String)];

/// Errors a transport call can produce.
///
/// Two shapes only: either no response arrived at all, or the server responded with a
/// non-2xx status and a message. Field-level server errors are flattened into a single
/// joined string before they get here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// No response received (DNS, connect, TLS, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server responded with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl TransportError {
    /// The displayable message carried by this error, preferring the server-provided
    /// one when the request was rejected.
    pub fn message(&self) -> &str {
        match self {
            TransportError::Network(msg) => msg,
            TransportError::Rejected { message, .. } => message,
        }
    }
}

/// The shared HTTP client collaborator used by all stores.
///
/// Paths are relative to the transport's base URL; the transport injects default
/// headers (auth bearer token included). Responses are JSON values, optionally wrapped
/// as `{ data: ..., meta: {...} }` for paginated lists or `{ message, <resource>: ... }`
/// for some mutation endpoints. Envelope unwrapping is the caller's concern, see
/// [`crate::envelope`].
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str, query: &Query) -> Result<Value, TransportError>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
    async fn delete(&self, path: &str) -> Result<Value, TransportError>;
}
