//! Current User Use Case
//!
//! Resolves a request's session to its user, if any.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::{RequestSession, SessionManager};
use crate::domain::entity::User;
use crate::domain::repository::{SessionStore, UserDirectory};
use crate::error::AuthResult;

/// Current user use case
///
/// An anonymous request, a dead session, and a session whose user row has
/// vanished all resolve to `Ok(None)`. Only infrastructure failures are
/// errors.
pub struct CurrentUserUseCase<U, S>
where
    U: UserDirectory,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    users: Arc<U>,
    sessions: SessionManager<S>,
}

impl<U, S> CurrentUserUseCase<U, S>
where
    U: UserDirectory,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(users: Arc<U>, store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            users,
            sessions: SessionManager::new(store, config),
        }
    }

    pub async fn execute(&self, request: &RequestSession) -> AuthResult<Option<User>> {
        let Some(user_id) = self.sessions.current_user_id(request).await? else {
            return Ok(None);
        };

        self.users.find_by_id(user_id).await
    }
}
