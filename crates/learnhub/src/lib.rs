//! # learnhub
//!
//! Client state layer for the learnhub training platform: typed remote-data stores
//! for every back-office resource, the derived view computations shared by list and
//! detail pages, the auth session, and the media-upload side channel.
//!
//! All remote state flows through [`remote_store::ResourceStore`] instances, one per
//! resource, wired together by [`platform::Platform`]. The crate's own modules are
//! the domain half of the pattern:
//!
//! - [`model`]: entities, create/update payloads, and their
//!   [`Resource`](remote_store::Resource) bindings
//! - [`views`]: pure search/filter and status-by-date-range derivations
//! - [`validate`]: synchronous field-level form validation, run before any store
//!   operation is invoked
//! - [`auth`]: admin and learner sessions over persisted bearer tokens
//! - [`media`]: multipart uploads to the third-party media host
//! - [`platform`]: the composition root
//! - [`config`], [`telemetry`]: startup concerns

pub mod auth;
pub mod config;
pub mod media;
pub mod model;
pub mod platform;
pub mod telemetry;
pub mod validate;
pub mod views;

pub use config::Config;
pub use platform::Platform;
