//! Domain entities and their create/update payloads.
//!
//! Each model file carries three things: the entity struct as the server returns it,
//! the DTOs sent on create/update, and the [`Resource`](remote_store::Resource)
//! implementation that binds the entity to its collection path and identifying key.
//! Entities whose list pages offer search also implement
//! [`SearchFields`](crate::views::search::SearchFields) here, next to the fields it
//! designates.

mod cohort;
mod course;
mod library;
mod member;
mod organization;
mod recap;
mod user;

pub use cohort::{Cohort, CohortCreate, CohortUpdate};
pub use course::{Course, CourseCreate, CourseUpdate};
pub use library::{LibraryItem, LibraryItemCreate, LibraryItemUpdate};
pub use member::{OrganizationMember, OrganizationMemberCreate, OrganizationMemberUpdate};
pub use organization::{Organization, OrganizationCreate, OrganizationUpdate};
pub use recap::{RecapMaterial, RecapMaterialCreate, RecapMaterialUpdate};
pub use user::{User, UserCreate, UserUpdate};
