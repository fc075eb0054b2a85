//! Platform wiring: one shared transport, one store per resource.
//!
//! [`Platform`] is the application's composition root. It is built once at startup
//! and lives for the process lifetime; every store it holds is the single,
//! process-wide state container for its resource.

use crate::auth::{Audience, SessionStore, TokenStorage};
use crate::config::Config;
use crate::media::MediaUploader;
use crate::model::{
    Cohort, Course, LibraryItem, Organization, OrganizationMember, RecapMaterial, User,
};
use remote_store::{ApiTransport, HttpTransport, ResourceStore, TransportError};
use std::sync::Arc;
use tracing::info;

/// The fully wired client state layer.
pub struct Platform {
    pub courses: ResourceStore<Course>,
    pub cohorts: ResourceStore<Cohort>,
    pub organizations: ResourceStore<Organization>,
    pub members: ResourceStore<OrganizationMember>,
    pub library: ResourceStore<LibraryItem>,
    pub recaps: ResourceStore<RecapMaterial>,
    pub users: ResourceStore<User>,
    pub session: SessionStore,
    pub media: MediaUploader,
}

impl Platform {
    /// Builds the platform against the real HTTP transport.
    ///
    /// The bearer token is read synchronously from storage at construction time
    /// (admin token preferred, learner token otherwise); after a fresh login the
    /// application rebuilds the platform so the new token takes effect, matching the
    /// stores' created-once-at-startup lifecycle.
    pub fn new(config: &Config, storage: Arc<dyn TokenStorage>) -> Result<Self, TransportError> {
        let token = storage
            .load(Audience::Admin)
            .or_else(|| storage.load(Audience::Learner));
        let transport: Arc<dyn ApiTransport> =
            Arc::new(HttpTransport::new(&config.api_base_url, token.as_deref())?);

        info!(api = %config.api_base_url, authenticated = token.is_some(), "platform ready");
        Ok(Self::with_transport(
            transport,
            storage,
            MediaUploader::new(&config.media_upload_url),
        ))
    }

    /// Builds the platform over an injected transport. Tests use this with
    /// [`MockTransport`](remote_store::mock::MockTransport).
    pub fn with_transport(
        transport: Arc<dyn ApiTransport>,
        storage: Arc<dyn TokenStorage>,
        media: MediaUploader,
    ) -> Self {
        Self {
            courses: ResourceStore::new(Arc::clone(&transport)),
            cohorts: ResourceStore::new(Arc::clone(&transport)),
            organizations: ResourceStore::new(Arc::clone(&transport)),
            members: ResourceStore::new(Arc::clone(&transport)),
            library: ResourceStore::new(Arc::clone(&transport)),
            recaps: ResourceStore::new(Arc::clone(&transport)),
            users: ResourceStore::new(Arc::clone(&transport)),
            session: SessionStore::new(transport, storage),
            media,
        }
    }
}
