//! Router configuration and assembly.
//!
//! Route groups are independent registration functions composed against the
//! shared router, so each group can be read (and tested) on its own:
//!
//! ```text
//! /                  - login form (public)
//! /sessions/new      - login form (public)
//! /sessions          - POST, record user id in session (public)
//! /secrets           - protected page (session guard)
//! /health            - health check (public)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use session_gate::server::{create_router, RouterConfig};
//! use session_gate::session::{CookieCodec, SessionStore};
//!
//! let store = SessionStore::new();
//! let codec = CookieCodec::new("my-secret-key");
//! let router = create_router(store, codec, RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::DEFAULT_COOKIE_NAME;
use crate::session::{CookieCodec, SessionStore};

use super::guard::require_login;
use super::handlers::{
    create_session_handler, health_handler, login_form_handler, secrets_handler, AppState,
};

// =============================================================================
// Paths
// =============================================================================

/// Path of the login form (redirect target for unauthenticated requests).
pub const LOGIN_FORM_PATH: &str = "/sessions/new";

/// Path of the protected page (redirect target after login).
pub const SECRETS_PATH: &str = "/secrets";

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Name of the session cookie
    pub cookie_name: String,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with defaults: the default cookie name
    /// and tracing enabled.
    pub fn new() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            enable_tracing: true,
        }
    }

    /// Set the session cookie name.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Route Groups
// =============================================================================

/// Register the session routes: login form and login submission.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_form_handler))
        .route(LOGIN_FORM_PATH, get(login_form_handler))
        .route("/sessions", post(create_session_handler))
}

/// Register the protected routes behind the session guard.
///
/// The guard is applied with `route_layer` so it only covers the routes in
/// this group.
pub fn secret_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(SECRETS_PATH, get(secrets_handler))
        .route_layer(middleware::from_fn_with_state(state, require_login))
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// Composes the route groups, wires in the shared state, and applies
/// request tracing when enabled.
pub fn create_router(store: SessionStore, codec: CookieCodec, config: RouterConfig) -> Router {
    let state = AppState::new(store, codec, config.cookie_name);

    let router = Router::new()
        .merge(session_routes())
        .merge(secret_routes(state.clone()))
        .route("/health", get(health_handler))
        .with_state(state);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

// =============================================================================
// Tests
// =============================================================================
