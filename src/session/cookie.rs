//! Session cookie codec.
//!
//! Session tokens are opaque server-side identifiers. The cookie carries the
//! token together with an HMAC-SHA256 signature so a tampered cookie is
//! rejected before the store is consulted:
//!
//! ```text
//! cookie value = "{token}.{hex(HMAC-SHA256(secret_key, token))}"
//! ```
//!
//! Verification uses constant-time comparison to prevent timing attacks.
//!
//! # Example
//!
//! ```rust
//! use session_gate::session::CookieCodec;
//!
//! let codec = CookieCodec::new("my-secret-key");
//! let value = codec.encode("abc123");
//! assert_eq!(codec.decode(&value).unwrap(), "abc123");
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::SessionError;

/// HMAC-SHA256 type alias
type HmacSha256 = Hmac<Sha256>;

/// Encodes and verifies signed session cookie values.
#[derive(Clone)]
pub struct CookieCodec {
    /// Secret key for HMAC computation
    secret_key: Vec<u8>,
}

impl CookieCodec {
    /// Create a new codec with the given secret key.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret_key: secret.as_ref().to_vec(),
        }
    }

    /// Encode a session token as a signed cookie value.
    pub fn encode(&self, token: &str) -> String {
        format!("{}.{}", token, hex::encode(self.signature(token)))
    }

    /// Decode a cookie value, returning the session token if the signature
    /// verifies.
    pub fn decode(&self, value: &str) -> Result<String, SessionError> {
        let (token, signature) = value
            .split_once('.')
            .ok_or(SessionError::MalformedCookie)?;

        let provided = hex::decode(signature).map_err(|_| SessionError::MalformedCookie)?;
        let expected = self.signature(token);

        if expected.ct_eq(&provided).into() {
            Ok(token.to_string())
        } else {
            Err(SessionError::InvalidSignature)
        }
    }

    /// Compute the HMAC-SHA256 signature over a token.
    fn signature(&self, token: &str) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret_key).expect("HMAC can take key of any size");
        mac.update(token.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

// =============================================================================
// Tests
// =============================================================================
