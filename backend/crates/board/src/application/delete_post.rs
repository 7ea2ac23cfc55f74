//! Delete Post Use Case

use std::sync::Arc;

use crate::domain::repository::PostStore;
use crate::error::BoardResult;

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostStore,
{
    posts: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostStore,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Delete the post. `false` when nothing existed to delete; deleting
    /// the same id twice is not an error.
    pub async fn execute(&self, post_id: i64) -> BoardResult<bool> {
        let deleted = self.posts.delete(post_id).await?;

        if deleted {
            tracing::info!(post_id, "Post deleted");
        }

        Ok(deleted)
    }
}
