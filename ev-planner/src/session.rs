//! Per-session storage of the last route search.
//!
//! Amenity lookups refer to stations by position in a previous search, so
//! the routes of each session's most recent search are kept here until they
//! expire. A new search replaces the previous one; nothing is merged.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;

use crate::domain::StoredRoute;

/// Routes stored for one session.
pub type SessionRoutes = Arc<Vec<StoredRoute>>;

/// Key-value store of session routes.
pub trait SessionStore: Send + Sync {
    /// Store the routes for a session, replacing anything stored before.
    fn put(&self, session_id: &str, routes: Vec<StoredRoute>);

    /// The routes stored for a session, if they have not expired.
    fn get(&self, session_id: &str) -> Option<SessionRoutes>;
}

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long a search is kept after it is stored.
    pub ttl: Duration,

    /// Maximum number of sessions kept.
    pub max_capacity: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// In-memory session store with expiry.
#[derive(Clone)]
pub struct MokaSessionStore {
    sessions: MokaCache<String, SessionRoutes>,
}

impl MokaSessionStore {
    /// Create a new store with the given configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { sessions }
    }

    /// Number of live sessions (approximate).
    pub fn entry_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}

impl SessionStore for MokaSessionStore {
    fn put(&self, session_id: &str, routes: Vec<StoredRoute>) {
        self.sessions.insert(session_id.to_string(), Arc::new(routes));
    }

    fn get(&self, session_id: &str) -> Option<SessionRoutes> {
        self.sessions.get(session_id)
    }
}
