//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{NewUser, Session, User};
use crate::error::AuthResult;

/// User directory trait
///
/// Username uniqueness is enforced by the backing store, not by a
/// read-then-write in the caller; `create` surfaces a duplicate as
/// [`AuthError::UsernameTaken`](crate::error::AuthError::UsernameTaken).
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// Insert a new user and return the stored row
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: i64) -> AuthResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;
}

/// Session store trait
///
/// Lookups never extend a session's lifetime; expiry is fixed when the
/// record is written.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Fetch a live session. Expired sessions are treated as absent.
    async fn get(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Insert or overwrite a session record
    async fn put(&self, session: &Session) -> AuthResult<()>;

    /// Delete a session, returning whether a record existed
    async fn delete(&self, session_id: Uuid) -> AuthResult<bool>;

    /// Clean up expired sessions, returning how many were deleted
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
