//! Candidate driving routes.

use serde::{Deserialize, Serialize};

use super::{Coordinate, Station};

/// One alternative route returned by the directions provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    /// Position among the provider's alternatives.
    pub id: usize,

    /// End point of every navigation step, in travel order.
    ///
    /// These are the candidate sampling points for station search; the full
    /// polyline is deliberately not decoded.
    pub waypoints: Vec<Coordinate>,

    /// Encoded polyline of every step, for rendering only.
    pub path: Vec<String>,

    pub distance_km: f64,
    pub duration_minutes: u64,

    /// Provider's label for the route (e.g. "NH19"), possibly empty.
    pub summary: String,

    /// Charging stations found along the route, deduplicated.
    pub stations: Vec<Station>,
}

/// The part of a route kept in the session between requests.
///
/// Drops the encoded path, which is only needed for the initial render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRoute {
    pub id: usize,
    pub distance_km: f64,
    pub duration_minutes: u64,
    pub summary: String,
    pub waypoints: Vec<Coordinate>,
    pub stations: Vec<Station>,
}

impl From<&RouteCandidate> for StoredRoute {
    fn from(route: &RouteCandidate) -> Self {
        Self {
            id: route.id,
            distance_km: route.distance_km,
            duration_minutes: route.duration_minutes,
            summary: route.summary.clone(),
            waypoints: route.waypoints.clone(),
            stations: route.stations.clone(),
        }
    }
}
