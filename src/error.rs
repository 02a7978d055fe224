use thiserror::Error;

/// Errors from the session cookie layer.
///
/// These never surface as HTTP errors: a request carrying a bad cookie is
/// treated as anonymous and follows the redirect path instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Cookie value is not in the expected "token.signature" shape
    #[error("Malformed session cookie")]
    MalformedCookie,

    /// Cookie signature does not match the token
    #[error("Invalid session cookie signature")]
    InvalidSignature,
}
