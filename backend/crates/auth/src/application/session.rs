//! Session Manager
//!
//! Opens, binds, and clears cookie-backed sessions. The browser holds a
//! signed token `"{session_id}.{signature}"`; the server holds the actual
//! session record keyed by the id.
//!
//! A missing, malformed, or tampered token is an anonymous request, not an
//! error. Only store failures surface as [`AuthError`].

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::Session;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// The session context of one request.
///
/// `session_id` is `Some` only when the presented token carried a valid
/// signature. It says nothing about whether the store still holds a live
/// record for that id.
#[derive(Debug, Clone, Default)]
pub struct RequestSession {
    pub session_id: Option<Uuid>,
}

impl RequestSession {
    /// An anonymous request session (no valid token presented)
    pub fn anonymous() -> Self {
        Self { session_id: None }
    }

    pub fn is_anonymous(&self) -> bool {
        self.session_id.is_none()
    }
}

/// Session manager
///
/// Cheap to clone; handlers build one per request from shared state.
pub struct SessionManager<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> Clone for SessionManager<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S> SessionManager<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    /// Open the session context for a request.
    ///
    /// `token` is the raw cookie value, if the request carried one. Any
    /// defect in the token (wrong shape, bad base64, failed signature,
    /// non-UUID id) yields an anonymous session.
    pub fn open(&self, token: Option<&str>) -> RequestSession {
        match token.and_then(|t| self.parse_session_token(t)) {
            Some(session_id) => RequestSession {
                session_id: Some(session_id),
            },
            None => RequestSession::anonymous(),
        }
    }

    /// Resolve the request session to a user id.
    ///
    /// Returns `Ok(None)` for anonymous requests and for ids the store no
    /// longer holds (expired or cleared). The lookup does not touch the
    /// session's expiry.
    pub async fn current_user_id(&self, request: &RequestSession) -> AuthResult<Option<i64>> {
        let Some(session_id) = request.session_id else {
            return Ok(None);
        };

        let session = self.store.get(session_id).await?;
        Ok(session.map(|s| s.user_id))
    }

    /// Bind a user to the request's session and return the signed token.
    ///
    /// Reuses the presented session id when there is one, so logging in
    /// over an existing session overwrites it in place. Otherwise a fresh
    /// random id is minted.
    pub async fn bind_user(&self, request: &RequestSession, user_id: i64) -> AuthResult<String> {
        let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
        let session = Session::new(session_id, user_id, self.config.session_ttl_ms());

        self.store.put(&session).await?;

        Ok(self.generate_session_token(session_id))
    }

    /// Clear the request's session from the store.
    ///
    /// Returns whether a server-side record was actually removed. Anonymous
    /// requests clear nothing and return `false`.
    pub async fn clear(&self, request: &RequestSession) -> AuthResult<bool> {
        let Some(session_id) = request.session_id else {
            return Ok(false);
        };

        self.store.delete(session_id).await
    }

    /// Generate signed session token
    fn generate_session_token(&self, session_id: Uuid) -> String {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let session_id = session_id.to_string();

        // Create HMAC signature
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id.as_bytes());
        let signature = mac.finalize().into_bytes();

        let signature_b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{session_id}.{signature_b64}")
    }

    /// Parse and verify a session token. `None` on any defect.
    fn parse_session_token(&self, token: &str) -> Option<Uuid> {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let (session_id_str, signature_b64) = token.split_once('.')?;

        // Verify signature
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id_str.as_bytes());

        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(signature_b64)
            .ok()?;

        mac.verify_slice(&signature).ok()?;

        // Parse UUID
        session_id_str.parse().ok()
    }
}
