//! Board Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::PostStore;
use crate::infra::postgres::PgPostStore;
use crate::presentation::handlers::{self, BoardAppState};

/// Create the Board router with PostgreSQL store
pub fn board_router(store: PgPostStore) -> Router {
    let state = BoardAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route(
            "/posts",
            get(handlers::list_posts::<PgPostStore>).post(handlers::create_post::<PgPostStore>),
        )
        .route(
            "/posts/{id}",
            get(handlers::get_post::<PgPostStore>)
                .put(handlers::update_post::<PgPostStore>)
                .delete(handlers::delete_post::<PgPostStore>),
        )
        .with_state(state)
}

/// Create a generic Board router for any store implementation
pub fn board_router_generic<P>(store: P) -> Router
where
    P: PostStore + Clone + Send + Sync + 'static,
{
    let state = BoardAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route(
            "/posts",
            get(handlers::list_posts::<P>).post(handlers::create_post::<P>),
        )
        .route(
            "/posts/{id}",
            get(handlers::get_post::<P>)
                .put(handlers::update_post::<P>)
                .delete(handlers::delete_post::<P>),
        )
        .with_state(state)
}
