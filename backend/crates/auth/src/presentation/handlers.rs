//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::CookieConfig;

use crate::application::config::AuthConfig;
use crate::application::{
    CredentialOutcome, CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterUseCase, RequestSession, SessionManager,
};
use crate::domain::repository::{SessionStore, UserDirectory};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, RegisterRequest, UserDto, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
///
/// Rejected credentials come back as 200 with an `errors` envelope; the
/// request itself succeeded even though no account was made.
pub async fn register<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
{
    let session = open_session(&state, &headers);

    let use_case =
        RegisterUseCase::new(state.store.clone(), state.store.clone(), state.config.clone());

    let input = RegisterInput {
        username: req.username,
        password: req.password,
    };

    let outcome = use_case.execute(&session, input).await?;

    Ok(credential_response(&state.config, outcome))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
{
    let session = open_session(&state, &headers);

    let use_case =
        LoginUseCase::new(state.store.clone(), state.store.clone(), state.config.clone());

    let input = LoginInput {
        username: req.username,
        password: req.password,
    };

    let outcome = use_case.execute(&session, input).await?;

    Ok(credential_response(&state.config, outcome))
}

// ============================================================================
// Me
// ============================================================================

/// GET /api/me
///
/// `null` body for anonymous requests; never an auth error.
pub async fn me<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> AuthResult<Json<Option<UserDto>>>
where
    S: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
{
    let session = open_session(&state, &headers);

    let use_case =
        CurrentUserUseCase::new(state.store.clone(), state.store.clone(), state.config.clone());

    let user = use_case.execute(&session).await?;

    Ok(Json(user.map(UserDto::from)))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/logout
///
/// Body is `true` when a server-side session was destroyed. The cookie is
/// cleared either way.
pub async fn logout<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    S: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
{
    let session = open_session(&state, &headers);

    let use_case = LogoutUseCase::new(state.store.clone(), state.config.clone());

    let destroyed = use_case.execute(&session).await?;

    let cookie = cookie_config(&state.config).build_delete_cookie();

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(destroyed)))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Open the request's session from its cookie, if any.
fn open_session<S>(state: &AuthAppState<S>, headers: &HeaderMap) -> RequestSession
where
    S: UserDirectory + SessionStore + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(headers, &state.config.session_cookie_name);

    SessionManager::new(state.store.clone(), state.config.clone()).open(token.as_deref())
}

/// Turn a credential outcome into the register/login response.
///
/// Both branches are 200; only an accepted outcome sets the cookie.
fn credential_response(
    config: &AuthConfig,
    outcome: CredentialOutcome,
) -> axum::response::Response {
    match outcome {
        CredentialOutcome::Accepted {
            user,
            session_token,
        } => {
            let cookie = cookie_config(config).build_set_cookie(&session_token);

            (
                StatusCode::OK,
                [(header::SET_COOKIE, cookie)],
                Json(UserResponse::user(user)),
            )
                .into_response()
        }
        CredentialOutcome::Rejected(errors) => {
            (StatusCode::OK, Json(UserResponse::errors(errors))).into_response()
        }
    }
}

fn cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl_secs()),
    }
}
