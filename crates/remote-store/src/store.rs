//! # Generic Resource Store
//!
//! This module defines [`ResourceStore`], the state container that mediates between
//! consumers and the [`ApiTransport`]. One instance exists per resource type for the
//! lifetime of the application; every resource gets the same five operations (list,
//! get_one, create, update, delete) and the same pending → fulfilled/rejected
//! transitions, written once here instead of duplicated per resource.
//!
//! # Concurrency Note
//! The state lock is held only across state writes, never across the network await.
//! Two concurrent invocations of the same operation therefore race, and whichever
//! settles last wins: there is no cancellation, no generation counter, and no
//! serialization of requests. Consumers that re-invoke `list` on rapidly changing
//! filter input must tolerate a final state reflecting a superseded request.

use crate::envelope;
use crate::resource::{Identifier, Resource};
use crate::state::StoreState;
use crate::transport::{ApiTransport, TransportError};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// A normalized, displayable store operation failure. The same string is written into
/// the store's `error` field before being returned.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Free-form query filters for list operations: search text, page number, per-page
/// count, status, whatever the resource's endpoint understands.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    params: Vec<(String, String)>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn search(self, term: impl Into<String>) -> Self {
        self.param("search", term)
    }

    pub fn page(self, page: u32) -> Self {
        self.param("page", page.to_string())
    }

    pub fn per_page(self, per_page: u32) -> Self {
        self.param("per_page", per_page.to_string())
    }

    pub fn as_query(&self) -> &[(String, String)] {
        &self.params
    }
}

/// The in-memory state container for one resource type.
///
/// Cheap to clone (shared state behind an `Arc`); a clone observes and mutates the
/// same store. The transport is dependency-injected so tests can run against
/// [`MockTransport`](crate::mock::MockTransport).
pub struct ResourceStore<T: Resource> {
    transport: Arc<dyn ApiTransport>,
    state: Arc<RwLock<StoreState<T>>>,
}

impl<T: Resource> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    /// A snapshot of the current store state.
    pub fn state(&self) -> StoreState<T> {
        self.read().clone()
    }

    /// Clears the one-shot `success` flag after the consumer has observed it.
    pub fn clear_success(&self) {
        self.write().success = false;
    }

    /// Clears a previously stored error, typically before a manual retry.
    pub fn clear_error(&self) {
        self.write().error = None;
    }

    // A poisoned lock only happens if a writer panicked mid-update; the state is
    // plain data, so recovering the guard is safe.
    fn read(&self) -> RwLockReadGuard<'_, StoreState<T>> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<T>> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    fn begin(&self) {
        let mut state = self.write();
        state.loading = true;
        state.error = None;
        state.success = false;
    }

    fn reject(&self, message: String) -> StoreError {
        let mut state = self.write();
        state.loading = false;
        state.error = Some(message.clone());
        state.success = false;
        warn!(resource = T::NAME, error = %message, "operation rejected");
        StoreError(message)
    }

    /// Fetches the collection, replacing `items` wholesale on success and updating
    /// pagination when the response carries a `meta` block. On failure `items` keeps
    /// its prior value.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<T>, StoreError> {
        self.begin();
        debug!(resource = T::NAME, ?filter, "list pending");

        let payload = match self.transport.get(T::COLLECTION, filter.as_query()).await {
            Ok(payload) => payload,
            Err(e) => return Err(self.reject(normalize(&e, &format!("Failed to fetch {}s", T::NAME)))),
        };

        let page = envelope::pagination(&payload);
        let data = envelope::unwrap_data(payload);
        let items: Vec<T> = match serde_json::from_value(data) {
            Ok(items) => items,
            Err(e) => {
                return Err(self.reject(format!("Failed to fetch {}s: {e}", T::NAME)));
            }
        };

        let mut state = self.write();
        state.loading = false;
        state.items = items.clone();
        if let Some(page) = page {
            state.pagination = page;
        }
        debug!(resource = T::NAME, count = items.len(), "list fulfilled");
        Ok(items)
    }

    /// Fetches a single entity by id or slug into `current_item`. The counterpart
    /// inside `items` is deliberately left alone; on failure `current_item` keeps its
    /// prior (possibly stale) value.
    pub async fn get_one(&self, ident: impl Into<Identifier>) -> Result<T, StoreError> {
        let ident = ident.into();
        self.begin();
        debug!(resource = T::NAME, %ident, "get_one pending");

        let path = format!("{}/{}", T::COLLECTION, ident);
        let payload = match self.transport.get(&path, &[]).await {
            Ok(payload) => payload,
            Err(e) => return Err(self.reject(normalize(&e, &format!("Failed to fetch {}", T::NAME)))),
        };

        let entity: T = match serde_json::from_value(envelope::extract_entity(payload, T::NAME)) {
            Ok(entity) => entity,
            Err(e) => return Err(self.reject(format!("Failed to fetch {}: {e}", T::NAME))),
        };

        let mut state = self.write();
        state.loading = false;
        state.current_item = Some(entity.clone());
        debug!(resource = T::NAME, %ident, "get_one fulfilled");
        Ok(entity)
    }

    /// Creates an entity. On success the decoded entity is prepended to `items`
    /// (no re-fetch) and `success` is set.
    pub async fn create(&self, payload: &T::Create) -> Result<T, StoreError> {
        self.begin();
        debug!(resource = T::NAME, ?payload, "create pending");

        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(e) => return Err(self.reject(format!("Failed to create {}: {e}", T::NAME))),
        };

        let response = match self.transport.post(T::COLLECTION, &body).await {
            Ok(response) => response,
            Err(e) => return Err(self.reject(normalize(&e, &format!("Failed to create {}", T::NAME)))),
        };

        let entity: T = match serde_json::from_value(envelope::extract_entity(response, T::NAME)) {
            Ok(entity) => entity,
            Err(e) => return Err(self.reject(format!("Failed to create {}: {e}", T::NAME))),
        };

        let mut state = self.write();
        state.loading = false;
        state.items.insert(0, entity.clone());
        state.success = true;
        debug!(resource = T::NAME, size = state.items.len(), "create fulfilled");
        Ok(entity)
    }

    /// Updates an entity. On success the matching element of `items` is replaced in
    /// place, `current_item` is overwritten, and `success` is set. A fulfilled update
    /// whose target is absent from `items` (deleted concurrently, or the list is
    /// stale) leaves `items` unchanged and logs the miss.
    pub async fn update(
        &self,
        ident: impl Into<Identifier>,
        payload: &T::Update,
    ) -> Result<T, StoreError> {
        let ident = ident.into();
        self.begin();
        debug!(resource = T::NAME, %ident, ?payload, "update pending");

        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(e) => return Err(self.reject(format!("Failed to update {}: {e}", T::NAME))),
        };

        let path = format!("{}/{}", T::COLLECTION, ident);
        let response = match self.transport.put(&path, &body).await {
            Ok(response) => response,
            Err(e) => return Err(self.reject(normalize(&e, &format!("Failed to update {}", T::NAME)))),
        };

        let entity: T = match serde_json::from_value(envelope::extract_entity(response, T::NAME)) {
            Ok(entity) => entity,
            Err(e) => return Err(self.reject(format!("Failed to update {}: {e}", T::NAME))),
        };

        let mut state = self.write();
        state.loading = false;
        match state.items.iter().position(|item| item.key().matches(&ident)) {
            Some(index) => state.items[index] = entity.clone(),
            None => warn!(resource = T::NAME, %ident, "update target not in items"),
        }
        state.current_item = Some(entity.clone());
        state.success = true;
        debug!(resource = T::NAME, %ident, "update fulfilled");
        Ok(entity)
    }

    /// Deletes an entity. On success the matching element is removed from `items`
    /// (absent identifier is an idempotent no-op) and a matching `current_item` is
    /// invalidated.
    pub async fn delete(&self, ident: impl Into<Identifier>) -> Result<(), StoreError> {
        let ident = ident.into();
        self.begin();
        debug!(resource = T::NAME, %ident, "delete pending");

        let path = format!("{}/{}", T::COLLECTION, ident);
        if let Err(e) = self.transport.delete(&path).await {
            return Err(self.reject(normalize(&e, &format!("Failed to delete {}", T::NAME))));
        }

        let mut state = self.write();
        state.loading = false;
        state.items.retain(|item| !item.key().matches(&ident));
        if state
            .current_item
            .as_ref()
            .is_some_and(|item| item.key().matches(&ident))
        {
            state.current_item = None;
        }
        state.success = true;
        debug!(resource = T::NAME, %ident, size = state.items.len(), "delete fulfilled");
        Ok(())
    }
}

/// Error-message normalization chain: server message, then transport message, then
/// the hardcoded per-operation fallback.
fn normalize(error: &TransportError, fallback: &str) -> String {
    let message = error.message();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefers_server_message() {
        let err = TransportError::Rejected {
            status: 422,
            message: "Slug already taken".into(),
        };
        assert_eq!(normalize(&err, "Failed to create course"), "Slug already taken");
    }

    #[test]
    fn normalize_falls_back_on_empty_message() {
        let err = TransportError::Network(String::new());
        assert_eq!(normalize(&err, "Failed to fetch courses"), "Failed to fetch courses");
    }

    #[test]
    fn list_filter_collects_params() {
        let filter = ListFilter::new().search("rust").page(2).per_page(25);
        assert_eq!(
            filter.as_query(),
            &[
                ("search".to_string(), "rust".to_string()),
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "25".to_string()),
            ]
        );
    }
}
