//! Session Entity

use chrono::Utc;
use uuid::Uuid;

/// Server-side session record.
///
/// The session id is random and opaque; the browser only ever sees it
/// wrapped in a signed token. Expiry is stored as a unix-epoch millisecond
/// timestamp so the store can filter without timezone arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Random v4 identifier, primary key of the store
    pub session_id: Uuid,
    /// The user this session is bound to
    pub user_id: i64,
    /// Expiry as unix epoch milliseconds
    pub expires_at_ms: i64,
}

impl Session {
    /// Create a session expiring `ttl_ms` milliseconds from now.
    pub fn new(session_id: Uuid, user_id: i64, ttl_ms: i64) -> Self {
        Self {
            session_id,
            user_id,
            expires_at_ms: Utc::now().timestamp_millis() + ttl_ms,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        self.expires_at_ms <= Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_not_expired() {
        let session = Session::new(Uuid::new_v4(), 7, 60_000);
        assert!(!session.is_expired());
        assert_eq!(session.user_id, 7);
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let session = Session::new(Uuid::new_v4(), 7, -1);
        assert!(session.is_expired());
    }
}
