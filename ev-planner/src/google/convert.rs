//! Conversion from Directions DTOs to domain routes.
//!
//! Flattens every leg and step of each alternative into a list of step end
//! points and encoded path segments, and sums distance and duration.

use tracing::{info, warn};

use crate::domain::{Coordinate, RouteCandidate};

use super::types::{DirectionsResponse, DirectionsRoute, STATUS_OK};

/// Why a directions response yielded no usable routes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Body status was not OK
    #[error("directions status {status}")]
    BadStatus {
        status: String,
        message: Option<String>,
    },

    /// Status was OK but the route list was empty
    #[error("no routes returned")]
    NoRoutes,
}

/// Convert a directions response into route candidates.
///
/// Fails if the status is not `OK` or no routes are present. Individual
/// routes with missing legs are kept with zero totals.
pub fn convert_directions(
    response: &DirectionsResponse,
) -> Result<Vec<RouteCandidate>, ConversionError> {
    if response.status != STATUS_OK {
        return Err(ConversionError::BadStatus {
            status: response.status.clone(),
            message: response.error_message.clone(),
        });
    }

    info!(routes = response.routes.len(), "directions returned");

    if response.routes.is_empty() {
        return Err(ConversionError::NoRoutes);
    }

    let routes: Vec<RouteCandidate> = response
        .routes
        .iter()
        .enumerate()
        .map(|(id, route)| convert_route(id, route))
        .collect();

    if routes.len() == 1 {
        info!("only one route available for this journey");
    }

    Ok(routes)
}

/// Flatten one alternative.
fn convert_route(id: usize, route: &DirectionsRoute) -> RouteCandidate {
    let mut waypoints = Vec::new();
    let mut path = Vec::new();
    let mut meters = 0.0;
    let mut seconds = 0.0;

    for leg in &route.legs {
        meters += leg.distance.as_ref().map_or(0.0, |d| d.value);
        seconds += leg.duration.as_ref().map_or(0.0, |d| d.value);

        for step in &leg.steps {
            match Coordinate::new(step.end_location.lat, step.end_location.lng) {
                Ok(point) => waypoints.push(point),
                Err(e) => warn!(route = id, error = %e, "skipping step with invalid end location"),
            }
            if let Some(polyline) = &step.polyline {
                path.push(polyline.points.clone());
            }
        }
    }

    info!(route = id, points = waypoints.len(), "processed route");

    RouteCandidate {
        id,
        waypoints,
        path,
        distance_km: meters_to_km(meters),
        duration_minutes: seconds_to_minutes(seconds),
        summary: route.summary.clone(),
        stations: Vec::new(),
    }
}

/// Meters to kilometers, rounded to two decimal places.
fn meters_to_km(meters: f64) -> f64 {
    (meters / 1000.0 * 100.0).round() / 100.0
}

/// Seconds to whole minutes, rounded.
fn seconds_to_minutes(seconds: f64) -> u64 {
    (seconds / 60.0).round().max(0.0) as u64
}
