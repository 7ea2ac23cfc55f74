//! Update Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostStore;
use crate::error::BoardResult;

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostStore,
{
    posts: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostStore,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Replace the post's title. `None` when the post does not exist.
    pub async fn execute(&self, post_id: i64, title: String) -> BoardResult<Option<Post>> {
        let updated = self.posts.update_title(post_id, &title).await?;

        if updated.is_some() {
            tracing::info!(post_id, "Post updated");
        }

        Ok(updated)
    }
}
