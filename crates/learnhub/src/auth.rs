//! Authentication session: admin and learner bearer tokens.
//!
//! Tokens live in a [`TokenStorage`] behind the session so guarded surfaces can read
//! them synchronously (absence means redirect to a login surface) while login/logout
//! go through the shared transport. There is no refresh or expiry handling; a token
//! is valid until logout clears it or the server rejects it.

use remote_store::{ApiTransport, TransportError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Which of the two independent sessions a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Admin,
    Learner,
}

impl Audience {
    fn login_path(self) -> &'static str {
        match self {
            Audience::Admin => "admin/login",
            Audience::Learner => "login",
        }
    }

    fn logout_path(self) -> &'static str {
        match self {
            Audience::Admin => "admin/logout",
            Audience::Learner => "logout",
        }
    }
}

/// Persisted client-side token storage. Reads are synchronous by contract: route
/// gating happens before any async work runs.
pub trait TokenStorage: Send + Sync {
    fn load(&self, audience: Audience) -> Option<String>;
    fn save(&self, audience: Audience, token: &str);
    fn clear(&self, audience: Audience);
}

/// In-memory token storage, also the test double.
#[derive(Default)]
pub struct MemoryTokenStorage {
    admin: Mutex<Option<String>>,
    learner: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, audience: Audience) -> &Mutex<Option<String>> {
        match audience {
            Audience::Admin => &self.admin,
            Audience::Learner => &self.learner,
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self, audience: Audience) -> Option<String> {
        self.slot(audience)
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn save(&self, audience: Audience, token: &str) {
        *self
            .slot(audience)
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }

    fn clear(&self, audience: Audience) {
        *self
            .slot(audience)
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// Login rejected by the server; carries the displayable message.
    #[error("{0}")]
    Rejected(String),

    /// The login response did not contain a token.
    #[error("login response missing token")]
    MissingToken,
}

/// The session collaborator shared by guarded surfaces.
pub struct SessionStore {
    transport: Arc<dyn ApiTransport>,
    storage: Arc<dyn TokenStorage>,
}

impl SessionStore {
    pub fn new(transport: Arc<dyn ApiTransport>, storage: Arc<dyn TokenStorage>) -> Self {
        Self { transport, storage }
    }

    /// Synchronous token read for route gating and transport construction.
    pub fn token(&self, audience: Audience) -> Option<String> {
        self.storage.load(audience)
    }

    pub fn is_authenticated(&self, audience: Audience) -> bool {
        self.token(audience).is_some()
    }

    /// Exchanges credentials for a bearer token and persists it.
    pub async fn login(
        &self,
        audience: Audience,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let body = json!({ "email": email, "password": password });
        let response = self
            .transport
            .post(audience.login_path(), &body)
            .await
            .map_err(|e: TransportError| AuthError::Rejected(e.message().to_string()))?;

        let token = extract_token(&response).ok_or(AuthError::MissingToken)?;
        self.storage.save(audience, token);
        debug!(?audience, "login succeeded");
        Ok(())
    }

    /// Clears the persisted token. The server-side logout call is best-effort: a
    /// failure there must never leave the client logged in.
    pub async fn logout(&self, audience: Audience) {
        if let Err(e) = self
            .transport
            .post(audience.logout_path(), &Value::Null)
            .await
        {
            warn!(?audience, error = %e, "server logout failed, clearing token anyway");
        }
        self.storage.clear(audience);
        debug!(?audience, "session cleared");
    }
}

/// Login responses nest the token as `token` or `access_token`, optionally under
/// `data`.
fn extract_token(response: &Value) -> Option<&str> {
    let body = response.get("data").unwrap_or(response);
    body.get("token")
        .or_else(|| body.get("access_token"))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_token_accepts_all_shapes() {
        assert_eq!(extract_token(&json!({ "token": "abc" })), Some("abc"));
        assert_eq!(extract_token(&json!({ "access_token": "abc" })), Some("abc"));
        assert_eq!(
            extract_token(&json!({ "data": { "token": "abc" } })),
            Some("abc")
        );
        assert_eq!(extract_token(&json!({ "message": "ok" })), None);
    }

    #[test]
    fn memory_storage_keeps_audiences_independent() {
        let storage = MemoryTokenStorage::new();
        storage.save(Audience::Admin, "admin-token");
        assert_eq!(storage.load(Audience::Admin).as_deref(), Some("admin-token"));
        assert!(storage.load(Audience::Learner).is_none());

        storage.clear(Audience::Admin);
        assert!(storage.load(Audience::Admin).is_none());
    }
}
