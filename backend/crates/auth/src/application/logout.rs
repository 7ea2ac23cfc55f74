//! Logout Use Case
//!
//! Destroys the server-side session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::{RequestSession, SessionManager};
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    sessions: SessionManager<S>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            sessions: SessionManager::new(store, config),
        }
    }

    /// Returns whether a session record was actually destroyed. Logging
    /// out an anonymous or already-dead session succeeds with `false`.
    pub async fn execute(&self, request: &RequestSession) -> AuthResult<bool> {
        let destroyed = self.sessions.clear(request).await?;

        if destroyed {
            tracing::info!(session_id = ?request.session_id, "User logged out");
        }

        Ok(destroyed)
    }
}
