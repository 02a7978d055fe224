//! Configuration management for session-gate.
//!
//! Supports command-line arguments via clap, environment variables with the
//! `GATE_` prefix, and defaults for everything except the cookie secret.
//!
//! # Environment Variables
//!
//! - `GATE_HOST` - Server bind address (default: 127.0.0.1)
//! - `GATE_PORT` - Server port (default: 3000)
//! - `GATE_COOKIE_SECRET` - HMAC secret for session cookies (required)
//! - `GATE_COOKIE_NAME` - Session cookie name (default: gate_session)
//! - `GATE_SESSION_TTL` - Session lifetime in seconds (default: 3600)

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default session cookie name.
pub const DEFAULT_COOKIE_NAME: &str = "gate_session";

/// Default session lifetime in seconds (1 hour).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

/// Minimum accepted cookie secret length in bytes.
const MIN_SECRET_LEN: usize = 16;

// =============================================================================
// CLI Arguments
// =============================================================================

/// session-gate - a session-gated login server.
///
/// Serves a login form, records the submitted user id in a cookie-backed
/// session, and gates a protected page behind it.
#[derive(Parser, Debug, Clone)]
#[command(name = "session-gate")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "GATE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "GATE_PORT")]
    pub port: u16,

    // =========================================================================
    // Session Configuration
    // =========================================================================
    /// Secret key used to sign session cookies (HMAC-SHA256).
    #[arg(long, env = "GATE_COOKIE_SECRET")]
    pub cookie_secret: String,

    /// Name of the session cookie.
    #[arg(long, default_value = DEFAULT_COOKIE_NAME, env = "GATE_COOKIE_NAME")]
    pub cookie_name: String,

    /// Session lifetime in seconds.
    #[arg(long, default_value_t = DEFAULT_SESSION_TTL_SECS, env = "GATE_SESSION_TTL")]
    pub session_ttl: u64,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.cookie_secret.len() < MIN_SECRET_LEN {
            return Err(format!(
                "cookie secret must be at least {} bytes. \
                 Set --cookie-secret or GATE_COOKIE_SECRET",
                MIN_SECRET_LEN
            ));
        }

        if self.cookie_name.is_empty() {
            return Err("cookie name must not be empty".to_string());
        }

        // Characters that would break the Set-Cookie header
        if self
            .cookie_name
            .chars()
            .any(|c| c.is_whitespace() || c == '=' || c == ';' || c == ',')
        {
            return Err(format!(
                "cookie name '{}' contains characters not allowed in a cookie name",
                self.cookie_name
            ));
        }

        if self.session_ttl == 0 {
            return Err("session_ttl must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
