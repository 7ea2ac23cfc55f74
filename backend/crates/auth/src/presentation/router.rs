//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionStore, UserDirectory};
use crate::infra::postgres::PgAuthStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL store
pub fn auth_router(store: PgAuthStore, config: AuthConfig) -> Router {
    let state = AuthAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/me", get(handlers::me::<PgAuthStore>))
        .route("/register", post(handlers::register::<PgAuthStore>))
        .route("/login", post(handlers::login::<PgAuthStore>))
        .route("/logout", post(handlers::logout::<PgAuthStore>))
        .with_state(state)
}

/// Create a generic Auth router for any store implementation
pub fn auth_router_generic<S>(store: S, config: AuthConfig) -> Router
where
    S: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/me", get(handlers::me::<S>))
        .route("/register", post(handlers::register::<S>))
        .route("/login", post(handlers::login::<S>))
        .route("/logout", post(handlers::logout::<S>))
        .with_state(state)
}
