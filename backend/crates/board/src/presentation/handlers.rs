//! HTTP Handlers
//!
//! All post endpoints are public; no session is consulted.

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, ReadPostsUseCase, UpdatePostUseCase,
};
use crate::domain::repository::PostStore;
use crate::error::BoardResult;
use crate::presentation::dto::{CreatePostRequest, PostDto, UpdatePostRequest};

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardAppState<P>
where
    P: PostStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<P>,
}

/// GET /api/posts
pub async fn list_posts<P>(
    State(state): State<BoardAppState<P>>,
) -> BoardResult<Json<Vec<PostDto>>>
where
    P: PostStore + Clone + Send + Sync + 'static,
{
    let use_case = ReadPostsUseCase::new(state.store.clone());

    let posts = use_case.list().await?;

    Ok(Json(posts.into_iter().map(PostDto::from).collect()))
}

/// GET /api/posts/{id}
///
/// Body is `null` for an unknown id; the request still succeeds.
pub async fn get_post<P>(
    State(state): State<BoardAppState<P>>,
    Path(post_id): Path<i64>,
) -> BoardResult<Json<Option<PostDto>>>
where
    P: PostStore + Clone + Send + Sync + 'static,
{
    let use_case = ReadPostsUseCase::new(state.store.clone());

    let post = use_case.get(post_id).await?;

    Ok(Json(post.map(PostDto::from)))
}

/// POST /api/posts
pub async fn create_post<P>(
    State(state): State<BoardAppState<P>>,
    Json(req): Json<CreatePostRequest>,
) -> BoardResult<Json<PostDto>>
where
    P: PostStore + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.store.clone());

    let post = use_case.execute(CreatePostInput { title: req.title }).await?;

    Ok(Json(post.into()))
}

/// PUT /api/posts/{id}
pub async fn update_post<P>(
    State(state): State<BoardAppState<P>>,
    Path(post_id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> BoardResult<Json<Option<PostDto>>>
where
    P: PostStore + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.store.clone());

    let updated = use_case.execute(post_id, req.title).await?;

    Ok(Json(updated.map(PostDto::from)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<P>(
    State(state): State<BoardAppState<P>>,
    Path(post_id): Path<i64>,
) -> BoardResult<Json<bool>>
where
    P: PostStore + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.store.clone());

    let deleted = use_case.execute(post_id).await?;

    Ok(Json(deleted))
}
