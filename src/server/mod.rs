//! HTTP server layer for session-gate.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                             │
//! │   GET /sessions/new   POST /sessions   GET /secrets            │
//! │                                                                │
//! │  ┌────────────┐  ┌────────────┐  ┌─────────┐  ┌────────────┐  │
//! │  │  handlers  │  │   guard    │  │  views  │  │   routes   │  │
//! │  │ (requests) │  │ (redirect) │  │ (HTML)  │  │ (assembly) │  │
//! │  └────────────┘  └────────────┘  └─────────┘  └────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```

pub mod guard;
pub mod handlers;
pub mod routes;
pub mod views;

pub use guard::{require_login, CurrentSession};
pub use handlers::{
    create_session_handler, health_handler, login_form_handler, secrets_handler, AppState,
    HealthResponse, LoginForm,
};
pub use routes::{
    create_router, secret_routes, session_routes, RouterConfig, LOGIN_FORM_PATH, SECRETS_PATH,
};
