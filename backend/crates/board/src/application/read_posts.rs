//! Read Posts Use Case
//!
//! Listing and single-post lookup share a use case; neither mutates.

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostStore;
use crate::error::BoardResult;

/// Read posts use case
pub struct ReadPostsUseCase<P>
where
    P: PostStore,
{
    posts: Arc<P>,
}

impl<P> ReadPostsUseCase<P>
where
    P: PostStore,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// All posts, oldest first
    pub async fn list(&self) -> BoardResult<Vec<Post>> {
        self.posts.list().await
    }

    /// One post, or `None` if the id was never assigned or was deleted
    pub async fn get(&self, post_id: i64) -> BoardResult<Option<Post>> {
        self.posts.find_by_id(post_id).await
    }
}
