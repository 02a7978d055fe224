//! In-memory session store.
//!
//! Sessions are per-client key/value maps addressed by an opaque token. The
//! store is shared across handlers behind an `Arc` and guarded by an async
//! `RwLock`; reads (the hot path for guarded routes) only take the read lock.
//!
//! A session is created implicitly on first write. Sessions expire after a
//! configurable TTL; expired entries are dropped lazily on access and swept
//! by a periodic background task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::RngCore;
use tokio::sync::RwLock;

/// Session key holding the logged-in user identifier.
pub const USER_ID_KEY: &str = "user_id";

/// Default session TTL (1 hour).
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(3600);

/// Number of random bytes in a session token (hex-encoded to 32 chars).
const TOKEN_BYTES: usize = 16;

// =============================================================================
// Session Data
// =============================================================================

/// The key/value state of a single client session.
#[derive(Debug, Clone)]
pub struct SessionData {
    values: HashMap<String, String>,
    created_at: Instant,
}

impl SessionData {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            created_at: Instant::now(),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The stored user identifier, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.get(USER_ID_KEY)
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// Shared in-memory store mapping session tokens to session data.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionData>>>,
    ttl: Duration,
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            ttl: self.ttl,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store with the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    /// Create a store with a custom session TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// The configured session TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a fresh empty session and return its token.
    pub async fn create(&self) -> String {
        let token = generate_token();
        self.sessions
            .write()
            .await
            .insert(token.clone(), SessionData::new());
        token
    }

    /// Load the session for a token.
    ///
    /// Returns `None` for unknown tokens. Expired sessions are removed and
    /// reported as absent, so callers cannot observe stale state.
    pub async fn load(&self, token: &str) -> Option<SessionData> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(data) if !data.is_expired(self.ttl) => return Some(data.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: re-acquire as a write lock to drop the entry
        self.sessions.write().await.remove(token);
        None
    }

    /// Write a value into the session for a token.
    ///
    /// Unknown tokens get a fresh session: sessions are created implicitly
    /// on first write.
    pub async fn insert(&self, token: &str, key: &str, value: &str) {
        let mut sessions = self.sessions.write().await;
        let data = sessions
            .entry(token.to_string())
            .or_insert_with(SessionData::new);
        data.values.insert(key.to_string(), value.to_string());
    }

    /// Remove all expired sessions, returning the number dropped.
    pub async fn prune_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, data| !data.is_expired(self.ttl));
        before - sessions.len()
    }

    /// Number of live entries (expired-but-unswept sessions included).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Generate a random session token (32 hex chars).
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

// =============================================================================
// Tests
// =============================================================================
