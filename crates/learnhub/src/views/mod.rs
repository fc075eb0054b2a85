//! Derived view computations: ephemeral, non-persisted views over store data.
//!
//! Everything here is a pure function of its inputs, safe to recompute on every
//! render without mutating the store. The two recurring computations (search+filter
//! and status-by-date-range) used to be re-implemented on each page that needed
//! them, which let list and detail views disagree; they live here once instead.

pub mod search;
pub mod status;

pub use search::{filter_items, SearchFields};
pub use status::{derive_status, DerivedStatus};
