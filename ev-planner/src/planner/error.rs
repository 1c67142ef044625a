//! Trip planner error types.

use crate::domain::DomainError;

/// Errors surfaced to callers of the trip planner.
///
/// Individual station and amenity queries never fail a request; only these
/// conditions do.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlannerError {
    /// Directions provider returned no usable routes
    #[error("could not fetch routes: {reason}")]
    RouteUnavailable { reason: String },

    /// Origin or destination missing
    #[error("{0} must not be empty")]
    MissingLocation(&'static str),

    /// Vehicle or battery input rejected
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No search stored for this session
    #[error("please search for a route first; the session may have expired")]
    SessionExpired,

    /// Route index beyond the stored search
    #[error("route {route_id} not found; only {available} routes available")]
    RouteNotFound { route_id: usize, available: usize },

    /// Station index beyond the route's station list
    #[error("station {station_index} not found in route {route_id}")]
    StationNotFound {
        route_id: usize,
        station_index: usize,
    },
}
