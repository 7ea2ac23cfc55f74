//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::application::config::AuthConfig;
use crate::application::outcome::CredentialOutcome;
use crate::application::session::{RequestSession, SessionManager};
use crate::domain::entity::NewUser;
use crate::domain::repository::{SessionStore, UserDirectory};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserDirectory,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    users: Arc<U>,
    sessions: SessionManager<S>,
}

impl<U, S> RegisterUseCase<U, S>
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

    /// Validation stops at the first failing field, username before
    /// password, so a request that fails both only reports the username.
    pub async fn execute(
        &self,
        request: &RequestSession,
        input: RegisterInput,
    ) -> AuthResult<CredentialOutcome> {
        // Validate username
        if input.username.chars().count() <= 2 {
            return Ok(CredentialOutcome::rejected(
                "username",
                "must be longer than 2",
            ));
        }

        // Validate password
        if input.password.chars().count() <= 2 {
            return Ok(CredentialOutcome::rejected(
                "password",
                "must be longer than 2",
            ));
        }

        // Hash password
        let password_hash = PlainPassword::new(input.password)
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Create user; the unique index is the arbiter of taken usernames
        let new_user = NewUser::new(input.username, password_hash.as_phc_string());
        let user = match self.users.create(&new_user).await {
            Ok(user) => user,
            Err(AuthError::UsernameTaken) => {
                return Ok(CredentialOutcome::rejected(
                    "username",
                    "username already taken",
                ));
            }
            Err(e) => return Err(e),
        };

        // Sign the new user in
        let session_token = self.sessions.bind_user(request, user.id).await?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            "User registered"
        );

        Ok(CredentialOutcome::Accepted {
            user,
            session_token,
        })
    }
}
