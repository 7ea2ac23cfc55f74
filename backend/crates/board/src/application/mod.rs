//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod create_post;
pub mod delete_post;
pub mod read_posts;
pub mod update_post;

// Re-exports
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use read_posts::ReadPostsUseCase;
pub use update_post::UpdatePostUseCase;
