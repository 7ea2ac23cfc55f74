//! Login Use Case
//!
//! Verifies credentials and binds a session.

use std::sync::Arc;

use platform::password::{PlainPassword, verify_password};

use crate::application::config::AuthConfig;
use crate::application::outcome::CredentialOutcome;
use crate::application::session::{RequestSession, SessionManager};
use crate::domain::repository::{SessionStore, UserDirectory};
use crate::error::AuthResult;

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login use case
///
/// The two rejections are deliberately distinguishable: an unknown
/// username and a wrong password produce different field errors. Account
/// enumeration is accepted here in exchange for precise feedback.
pub struct LoginUseCase<U, S>
where
    U: UserDirectory,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    users: Arc<U>,
    sessions: SessionManager<S>,
}

impl<U, S> LoginUseCase<U, S>
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

    pub async fn execute(
        &self,
        request: &RequestSession,
        input: LoginInput,
    ) -> AuthResult<CredentialOutcome> {
        // Look up the user
        let Some(user) = self.users.find_by_username(&input.username).await? else {
            return Ok(CredentialOutcome::rejected(
                "username",
                "username does not exist",
            ));
        };

        // Verify password
        let plain = PlainPassword::new(input.password);
        if !verify_password(&user.password_hash, &plain) {
            return Ok(CredentialOutcome::rejected(
                "password",
                "password is incorrect",
            ));
        }

        // Bind session
        let session_token = self.sessions.bind_user(request, user.id).await?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            "User logged in"
        );

        Ok(CredentialOutcome::Accepted {
            user,
            session_token,
        })
    }
}
