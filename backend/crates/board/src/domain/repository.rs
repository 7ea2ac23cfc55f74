//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::Post;
use crate::error::BoardResult;

/// Post store trait
///
/// Mutations on absent ids report absence in the return value instead of
/// failing: `update_title` yields `None`, `delete` yields `false`.
#[trait_variant::make(PostStore: Send)]
pub trait LocalPostStore {
    /// Insert a new post and return the stored row
    async fn create(&self, title: &str) -> BoardResult<Post>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: i64) -> BoardResult<Option<Post>>;

    /// List all posts in ascending id order
    async fn list(&self) -> BoardResult<Vec<Post>>;

    /// Replace a post's title, returning the updated row if it exists
    async fn update_title(&self, post_id: i64, title: &str) -> BoardResult<Option<Post>>;

    /// Delete a post, returning whether a row existed
    async fn delete(&self, post_id: i64) -> BoardResult<bool>;
}
