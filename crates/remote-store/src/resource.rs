//! # Resource Trait
//!
//! The `Resource` trait defines the contract that every remote resource type
//! (Course, Cohort, Organization, ...) must implement to be managed by the generic
//! [`ResourceStore`](crate::ResourceStore).
//!
//! # Architecture Note
//! By defining a contract (`Resource`) that all resource types satisfy, we write the
//! fetch/decode/state-transition logic *once* and reuse it for every store. Associated
//! types enforce payload safety: a Course store accepts a `CourseCreate` payload, and
//! the compiler rejects a `CohortCreate` sent to it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{self, Debug, Display};

/// Trait that any remote resource entity must implement to be managed by a
/// [`ResourceStore`](crate::ResourceStore).
pub trait Resource: Clone + DeserializeOwned + Send + Sync + 'static {
    /// Payload for creating a new entity (DTO, serialized into the request body).
    type Create: Serialize + Send + Sync + Debug;

    /// Payload for updating an existing entity.
    type Update: Serialize + Send + Sync + Debug;

    /// Singular resource name, used in fallback error strings ("Failed to fetch
    /// courses") and to unwrap mutation response envelopes (`{ message, course: ... }`).
    const NAME: &'static str;

    /// Collection path under the API base URL, e.g. `"admin/courses"`.
    const COLLECTION: &'static str;

    /// The identifying key of this entity: a server-assigned numeric id and/or a
    /// human-readable slug. Slugs are immutable from the client's perspective; the
    /// client never generates them.
    fn key(&self) -> ResourceKey;
}

/// The identifying key carried by an entity. Either half may be absent depending on
/// what the server returns for the resource type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceKey {
    pub id: Option<u64>,
    pub slug: Option<String>,
}

impl ResourceKey {
    /// A key identified by numeric id only.
    pub fn id(id: u64) -> Self {
        Self {
            id: Some(id),
            slug: None,
        }
    }

    /// A key identified by both numeric id and slug.
    pub fn with_slug(id: u64, slug: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            slug: Some(slug.into()),
        }
    }

    /// Whether a lookup identifier refers to this key.
    pub fn matches(&self, ident: &Identifier) -> bool {
        match ident {
            Identifier::Id(id) => self.id == Some(*id),
            Identifier::Slug(slug) => self.slug.as_deref() == Some(slug.as_str()),
        }
    }
}

/// A lookup identifier accepted by `get_one`, `update`, and `delete`: either the
/// server-assigned numeric id or the resource slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Id(u64),
    Slug(String),
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{id}"),
            Identifier::Slug(slug) => f.write_str(slug),
        }
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Identifier::Id(id)
    }
}

impl From<&str> for Identifier {
    fn from(slug: &str) -> Self {
        Identifier::Slug(slug.to_string())
    }
}

impl From<String> for Identifier {
    fn from(slug: String) -> Self {
        Identifier::Slug(slug)
    }
}
