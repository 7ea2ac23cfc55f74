//! Domain Entities

use chrono::{DateTime, Utc};

/// Post entity - a single discussion-board post
///
/// Ids and timestamps are assigned by the database; there is no
/// client-side constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
