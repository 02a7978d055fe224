//! # session-gate
//!
//! A small session-gated login server.
//!
//! The server renders a login form, records a submitted user id in a
//! cookie-backed session, and serves a protected page only to clients whose
//! session holds a non-empty user id. Everyone else is redirected back to
//! the login form.
//!
//! ## Architecture
//!
//! - [`session`] - In-memory session store and signed cookie codec
//! - [`server`] - Axum router, handlers, session guard, and views
//! - [`config`] - CLI and configuration types
//!
//! Sessions live server-side; the cookie only carries an opaque token
//! authenticated with HMAC-SHA256, so a tampered cookie behaves exactly like
//! a missing one.
//!
//! ## Example
//!
//! ```rust,no_run
//! use session_gate::server::{create_router, RouterConfig};
//! use session_gate::session::{CookieCodec, SessionStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = SessionStore::new();
//!     let codec = CookieCodec::new("a-long-enough-secret");
//!     let router = create_router(store, codec, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
//!         .await
//!         .unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use error::SessionError;
pub use server::{
    create_router, require_login, secret_routes, session_routes, AppState, CurrentSession,
    HealthResponse, LoginForm, RouterConfig, LOGIN_FORM_PATH, SECRETS_PATH,
};
pub use session::{CookieCodec, SessionData, SessionStore, DEFAULT_SESSION_TTL, USER_ID_KEY};
