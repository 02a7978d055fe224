//! Session layer: server-side session store and signed cookie codec.
//!
//! The cookie only carries an opaque token; all session values live in the
//! in-memory [`SessionStore`]. The [`CookieCodec`] signs the token so a
//! tampered cookie is indistinguishable from no cookie at all.

pub mod cookie;
pub mod store;

pub use cookie::CookieCodec;
pub use store::{SessionData, SessionStore, DEFAULT_SESSION_TTL, USER_ID_KEY};
