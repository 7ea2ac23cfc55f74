//! User Entity

use chrono::{DateTime, Utc};

/// User entity
///
/// `password_hash` is the stored PHC string. It never leaves the auth
/// crate's presentation boundary; DTOs carry everything except this field.
#[derive(Debug, Clone)]
pub struct User {
    /// Database-generated identifier
    pub id: i64,
    /// Unique username, exactly as entered at registration
    pub username: String,
    /// Argon2id hash in PHC string format
    pub password_hash: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// A user about to be inserted.
///
/// The id and timestamps are assigned by the database, so creation goes
/// through this reduced shape and the directory hands back the full
/// [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_holds_fields() {
        let new_user = NewUser::new("alice", "$argon2id$v=19$stub");
        assert_eq!(new_user.username, "alice");
        assert_eq!(new_user.password_hash, "$argon2id$v=19$stub");
    }
}
