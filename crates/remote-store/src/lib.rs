//! # Remote Store
//!
//! Generic building blocks for client-side remote-data state: one typed store per
//! resource, five async CRUD operations per store, and a pluggable transport.
//!
//! ## The Pattern
//!
//! Every resource store holds the same observable state (a list, an optional current
//! item, loading/error/success flags, pagination) and exposes the same operations
//! (list, get_one, create, update, delete), each moving through pending →
//! fulfilled/rejected phases. Instead of duplicating that state machine per resource,
//! [`ResourceStore<T>`] implements it once, parameterized by the [`Resource`] trait.
//!
//! ## Layers
//!
//! 1. **Contract** ([`Resource`]): what identifies an entity, which payloads create
//!    and update it, where its collection lives.
//! 2. **State** ([`StoreState`]): the snapshot consumers render from.
//! 3. **Operations** ([`ResourceStore`]): the shared fetch/decode/transition logic.
//! 4. **Transport** ([`ApiTransport`]): the HTTP seam. [`HttpTransport`] in
//!    production, [`mock::MockTransport`] in tests.
//!
//! ## Concurrency Model
//!
//! Stores are shared, process-wide objects. Operations do not serialize: concurrent
//! invocations race and the last one to settle wins. There is no cancellation and no
//! request sequencing; consumers that need ordering must add it themselves. The
//! state lock is never held across a network await, so the race window is exactly the
//! round-trip.
//!
//! ## Example
//!
//! ```ignore
//! let transport = Arc::new(HttpTransport::new("https://api.example.com", Some(token))?);
//! let courses = ResourceStore::<Course>::new(transport);
//!
//! courses.list(&ListFilter::new().search("rust").page(1)).await?;
//! let snapshot = courses.state();
//! assert!(!snapshot.loading);
//! ```

pub mod envelope;
pub mod http;
pub mod mock;
pub mod resource;
pub mod state;
pub mod store;
pub mod transport;

pub use http::HttpTransport;
pub use resource::{Identifier, Resource, ResourceKey};
pub use state::{Pagination, StoreState};
pub use store::{ListFilter, ResourceStore, StoreError};
pub use transport::{ApiTransport, TransportError};
