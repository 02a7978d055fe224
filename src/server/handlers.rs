//! HTTP request handlers for the login flow and the protected page.
//!
//! # Endpoints
//!
//! - `GET /` and `GET /sessions/new` - Login form
//! - `POST /sessions` - Record the submitted user id in the session
//! - `GET /secrets` - Protected page (behind the session guard)
//! - `GET /health` - Health check endpoint

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::session::{CookieCodec, SessionStore, USER_ID_KEY};

use super::guard::CurrentSession;
use super::routes::SECRETS_PATH;
use super::views::{render_login_page, render_secret_page};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state passed to all handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// The session store
    pub store: SessionStore,

    /// Codec for signing and verifying session cookie values
    pub codec: CookieCodec,

    /// Name of the session cookie
    pub cookie_name: String,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: SessionStore, codec: CookieCodec, cookie_name: impl Into<String>) -> Self {
        Self {
            store,
            codec,
            cookie_name: cookie_name.into(),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Form body for `POST /sessions`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Submitted user identifier. Missing fields decode to an empty string;
    /// the value is stored verbatim, without validation.
    #[serde(default)]
    pub user_id: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the login form.
///
/// # Endpoints
///
/// `GET /` and `GET /sessions/new`
///
/// Always `200 OK`, no guard, no side effects.
pub async fn login_form_handler() -> Html<String> {
    Html(render_login_page())
}

/// Record the submitted user id in the session.
///
/// # Endpoint
///
/// `POST /sessions`
///
/// Reads the `user_id` form field and writes it verbatim into the session,
/// reusing the client's existing session when the request carries a valid
/// cookie and minting a fresh one otherwise. Always responds with a
/// `303 See Other` redirect to the protected page and a `Set-Cookie` header.
///
/// An empty or missing `user_id` is stored as-is; such a session will not
/// pass the guard, so the follow-up request bounces back to the login form.
pub async fn create_session_handler(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let token = match session.token {
        Some(token) => token,
        None => state.store.create().await,
    };

    state.store.insert(&token, USER_ID_KEY, &form.user_id).await;

    if form.user_id.is_empty() {
        debug!("Login submitted an empty user id; session will not authenticate");
    } else {
        info!(user_id = %form.user_id, "Session established");
    }

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        state.cookie_name,
        state.codec.encode(&token)
    );

    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to(SECRETS_PATH),
    )
}

/// Render the protected page.
///
/// # Endpoint
///
/// `GET /secrets`
///
/// Registered behind [`super::guard::require_login`], so this handler only
/// runs for authenticated sessions. Reads never mutate session state.
pub async fn secrets_handler(session: CurrentSession) -> Html<String> {
    // The guard guarantees a non-empty user id here
    let user_id = session.user_id().unwrap_or_default();
    Html(render_secret_page(user_id))
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
