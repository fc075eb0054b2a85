//! # Store State
//!
//! The observable state snapshot held by every [`ResourceStore`](crate::ResourceStore):
//! the fetched list, the optionally loaded single entity, the in-flight/error/success
//! flags, and pagination metadata.

/// Pagination metadata mirrored from list-endpoint `meta` blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub last_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            current_page: 1,
            per_page: 10,
            last_page: 1,
        }
    }
}

/// The full observable state of one resource store.
///
/// Invariants:
/// - `error` and `success` are only meaningful while `loading` is false; every new
///   operation clears both on entry to its pending phase.
/// - `success` is a one-shot mutation flag: it stays set until the consumer calls
///   [`ResourceStore::clear_success`](crate::ResourceStore::clear_success), so
///   success-driven side effects (toasts, navigation) fire exactly once per observation.
/// - `items` keeps server order. List replaces it wholesale; Create prepends; Update
///   replaces in place; Delete removes by identifier.
/// - `current_item` is independent of `items`: loading a single entity does not touch
///   its counterpart in the list.
#[derive(Debug, Clone)]
pub struct StoreState<T> {
    pub items: Vec<T>,
    pub current_item: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
    pub pagination: Pagination,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_item: None,
            loading: false,
            error: None,
            success: false,
            pagination: Pagination::default(),
        }
    }
}
