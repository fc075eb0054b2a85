//! # Mock Transport
//!
//! [`MockTransport`] implements the same [`ApiTransport`] API as the production HTTP
//! client but operates entirely in-memory against a FIFO queue of expectations. It
//! lets you write fast, deterministic tests for store logic without a server.
//!
//! ## Expectations
//!
//! ```ignore
//! let transport = Arc::new(MockTransport::new());
//! transport.expect_get("admin/courses").return_json(json!({ "data": [] }));
//! transport.expect_post("admin/courses").return_err(TransportError::Network("down".into()));
//!
//! let store = ResourceStore::<Course>::new(transport.clone());
//! // ... drive the store ...
//! transport.verify(); // panics if expectations remain
//! ```
//!
//! ## Gated responses
//!
//! A gated expectation parks the request until its [`ResponseGate`] is released,
//! which makes settle order scriptable. That is the only way to test
//! last-settled-wins races deterministically:
//!
//! ```ignore
//! let first = transport.expect_get("admin/courses").gate_json(stale_payload);
//! let second = transport.expect_get("admin/courses").gate_json(fresh_payload);
//! // start both requests, then release `second` before `first`
//! ```

use crate::transport::{ApiTransport, Query, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

/// HTTP verb of a recorded or expected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

struct Expectation {
    method: Method,
    path: String,
    response: Result<Value, TransportError>,
    gate: Option<Arc<Notify>>,
}

/// One request observed by the mock, for asserting paths, queries, and bodies.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Handle for releasing a gated expectation. Releasing before the request arrives is
/// fine; the permit is held until consumed.
pub struct ResponseGate {
    notify: Arc<Notify>,
}

impl ResponseGate {
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

/// In-memory [`ApiTransport`] with expectation tracking.
#[derive(Default)]
pub struct MockTransport {
    expectations: Mutex<VecDeque<Expectation>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Method::Get, path)
    }

    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Method::Post, path)
    }

    pub fn expect_put(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Method::Put, path)
    }

    pub fn expect_delete(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Method::Delete, path)
    }

    fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            mock: self,
            method,
            path: path.into(),
        }
    }

    /// Every request the mock has served, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("not all expectations were met: {remaining} remaining");
        }
    }

    fn push(&self, expectation: Expectation) {
        lock(&self.expectations).push_back(expectation);
    }

    async fn respond(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let expectation = lock(&self.expectations)
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {method:?} {path}"));
        assert_eq!(
            (expectation.method, expectation.path.as_str()),
            (method, path),
            "expectation mismatch: expected {:?} {}, got {method:?} {path}",
            expectation.method,
            expectation.path,
        );

        lock(&self.calls).push(RecordedCall {
            method,
            path: path.to_string(),
            query,
            body,
        });

        if let Some(gate) = &expectation.gate {
            gate.notified().await;
        }
        expectation.response
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Fluent builder for one expectation.
pub struct ExpectationBuilder<'a> {
    mock: &'a MockTransport,
    method: Method,
    path: String,
}

impl<'a> ExpectationBuilder<'a> {
    /// The request succeeds immediately with `value`.
    pub fn return_json(self, value: Value) {
        let (mock, expectation) = self.build(Ok(value), None);
        mock.push(expectation);
    }

    /// The request fails immediately with `error`.
    pub fn return_err(self, error: TransportError) {
        let (mock, expectation) = self.build(Err(error), None);
        mock.push(expectation);
    }

    /// The request succeeds with `value` once the returned gate is released.
    pub fn gate_json(self, value: Value) -> ResponseGate {
        let notify = Arc::new(Notify::new());
        let (mock, expectation) = self.build(Ok(value), Some(notify.clone()));
        mock.push(expectation);
        ResponseGate { notify }
    }

    /// The request fails with `error` once the returned gate is released.
    pub fn gate_err(self, error: TransportError) -> ResponseGate {
        let notify = Arc::new(Notify::new());
        let (mock, expectation) = self.build(Err(error), Some(notify.clone()));
        mock.push(expectation);
        ResponseGate { notify }
    }

    fn build(
        self,
        response: Result<Value, TransportError>,
        gate: Option<Arc<Notify>>,
    ) -> (&'a MockTransport, Expectation) {
        (
            self.mock,
            Expectation {
                method: self.method,
                path: self.path,
                response,
                gate,
            },
        )
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, path: &str, query: &Query) -> Result<Value, TransportError> {
        self.respond(Method::Get, path, query.to_vec(), None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.respond(Method::Post, path, Vec::new(), Some(body.clone()))
            .await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.respond(Method::Put, path, Vec::new(), Some(body.clone()))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Value, TransportError> {
        self.respond(Method::Delete, path, Vec::new(), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn expectations_are_consumed_in_order() {
        let mock = MockTransport::new();
        mock.expect_get("courses").return_json(json!([1]));
        mock.expect_delete("courses/1").return_json(Value::Null);

        assert_eq!(mock.get("courses", &[]).await.unwrap(), json!([1]));
        assert!(mock.delete("courses/1").await.is_ok());
        mock.verify();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::Get);
        assert_eq!(calls[1].path, "courses/1");
    }

    #[tokio::test]
    #[should_panic(expected = "not all expectations were met")]
    async fn verify_panics_on_unmet_expectations() {
        let mock = MockTransport::new();
        mock.expect_get("courses").return_json(json!([]));
        mock.verify();
    }

    #[tokio::test]
    async fn gate_released_before_request_still_resolves() {
        let mock = MockTransport::new();
        let gate = mock.expect_get("courses").gate_json(json!([]));
        gate.release();
        assert_eq!(mock.get("courses", &[]).await.unwrap(), json!([]));
    }
}
