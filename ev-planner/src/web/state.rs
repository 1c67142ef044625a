//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::TripPlanner;
use crate::session::SessionStore;

/// Shared application state.
///
/// Generic over the providers so handlers can be tested against mocks.
pub struct AppState<D, P, R> {
    /// Trip planner over the configured providers
    pub planner: Arc<TripPlanner<D, P, R>>,

    /// Routes from each session's last search
    pub sessions: Arc<dyn SessionStore>,
}

impl<D, P, R> AppState<D, P, R> {
    /// Create a new app state.
    pub fn new(planner: TripPlanner<D, P, R>, sessions: impl SessionStore + 'static) -> Self {
        Self {
            planner: Arc::new(planner),
            sessions: Arc::new(sessions),
        }
    }
}

impl<D, P, R> Clone for AppState<D, P, R> {
    fn clone(&self) -> Self {
        Self {
            planner: Arc::clone(&self.planner),
            sessions: Arc::clone(&self.sessions),
        }
    }
}
