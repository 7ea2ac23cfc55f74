//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostStore;
use crate::error::BoardResult;

/// Create post input
///
/// The title is stored verbatim; empty titles are allowed.
pub struct CreatePostInput {
    pub title: String,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostStore,
{
    posts: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostStore,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, input: CreatePostInput) -> BoardResult<Post> {
        let post = self.posts.create(&input.title).await?;

        tracing::info!(post_id = post.id, "Post created");

        Ok(post)
    }
}
