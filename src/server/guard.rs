//! Session guard: the authentication predicate and the redirect-if-absent
//! middleware gating protected routes.
//!
//! A request is authenticated iff its session holds a **non-empty**
//! `user_id`. An empty user id stored in the session does not authenticate;
//! neither does a missing, tampered, or expired cookie. None of these are
//! errors: unauthenticated requests to guarded routes get a redirect to the
//! login form, never an error status.
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::get, Router};
//! use session_gate::server::guard::require_login;
//!
//! let protected = Router::new()
//!     .route("/secrets", get(secrets_handler))
//!     .route_layer(middleware::from_fn_with_state(state, require_login));
//! ```

use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::session::SessionData;

use super::handlers::AppState;
use super::routes::LOGIN_FORM_PATH;

// =============================================================================
// Current Session Extractor
// =============================================================================

/// Axum extractor resolving the session for the current request.
///
/// Extraction never rejects: requests without a usable session produce an
/// anonymous `CurrentSession`. Handlers and middleware decide what to do
/// with it.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    /// The verified session token carried by the cookie, if any.
    ///
    /// Present whenever the cookie signature verified, even if the store no
    /// longer holds data for it (expired or unknown token).
    pub token: Option<String>,

    /// The session data, if the token resolved to a live session.
    pub data: Option<SessionData>,
}

impl CurrentSession {
    /// An anonymous session (no usable cookie).
    fn anonymous() -> Self {
        Self {
            token: None,
            data: None,
        }
    }

    /// The user id stored in the session, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(|data| data.user_id())
    }

    /// Whether this request is authenticated.
    ///
    /// True iff the session holds a non-empty `user_id`.
    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some_and(|user_id| !user_id.is_empty())
    }
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(raw) = cookie_value(&parts.headers, &state.cookie_name) else {
            return Ok(Self::anonymous());
        };

        let token = match state.codec.decode(&raw) {
            Ok(token) => token,
            Err(err) => {
                // Tampered cookies behave exactly like absent cookies
                debug!("Rejected session cookie: {}", err);
                return Ok(Self::anonymous());
            }
        };

        let data = state.store.load(&token).await;

        Ok(Self {
            token: Some(token),
            data,
        })
    }
}

/// Find a cookie value by name in the request headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

// =============================================================================
// Axum Middleware
// =============================================================================

/// Axum middleware gating a route behind a logged-in session.
///
/// Unauthenticated requests short-circuit with a `303 See Other` redirect to
/// the login form; the inner handler never runs. Authenticated requests pass
/// through untouched.
pub async fn require_login(session: CurrentSession, request: Request, next: Next) -> Response {
    if session.is_authenticated() {
        return next.run(request).await;
    }

    debug!(
        path = %request.uri().path(),
        "Unauthenticated request to guarded route, redirecting to login"
    );
    Redirect::to(LOGIN_FORM_PATH).into_response()
}

// =============================================================================
// Tests
// =============================================================================
