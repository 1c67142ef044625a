//! Trip planning: routes, range, stations and amenities.
//!
//! A search fetches every alternative route, then searches each route for
//! charging stations. Amenities are looked up later, for one station at a
//! time, against the routes stored from a previous search.

use serde::Serialize;
use tracing::info;

use crate::domain::{NearbyAmenities, RouteCandidate, Station, StoredRoute, VehicleCatalog};
use crate::google::{DirectionsProvider, PlacesProvider, convert_directions};
use crate::ocm::RegistryProvider;
use crate::sources::{GooglePlacesSource, OcmSource};

use super::aggregate::StationAggregator;
use super::amenities::AmenityLookup;
use super::config::PlannerConfig;
use super::error::PlannerError;

/// Request for a trip search.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub vehicle_model: String,
    /// Battery level, 0 to 100.
    pub battery_percent: u8,
}

impl TripRequest {
    /// Create a new trip request.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        vehicle_model: impl Into<String>,
        battery_percent: u8,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            vehicle_model: vehicle_model.into(),
            battery_percent,
        }
    }

    /// Check that both ends of the trip are given.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.origin.trim().is_empty() {
            return Err(PlannerError::MissingLocation("origin"));
        }
        if self.destination.trim().is_empty() {
            return Err(PlannerError::MissingLocation("destination"));
        }
        Ok(())
    }
}

/// Result of a trip search.
#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    /// Range achievable with the current battery, km.
    pub estimated_range_km: f64,

    /// Every alternative route, each with its stations.
    pub routes: Vec<RouteCandidate>,
}

/// A station and what is around it.
#[derive(Debug, Clone, Serialize)]
pub struct StationAmenities {
    pub station: Station,
    pub amenities: NearbyAmenities,
}

/// Plans EV trips against a directions provider and two station sources.
#[derive(Debug, Clone)]
pub struct TripPlanner<D, P, R> {
    directions: D,
    stations: StationAggregator<GooglePlacesSource<P>, OcmSource<R>>,
    amenities: AmenityLookup<P>,
    vehicles: VehicleCatalog,
}

impl<D, P, R> TripPlanner<D, P, R>
where
    D: DirectionsProvider,
    P: PlacesProvider + Clone,
    R: RegistryProvider,
{
    /// Create a planner with the built-in vehicle catalog.
    ///
    /// The places provider serves both station search and amenity lookup.
    pub fn new(directions: D, places: P, registry: R, config: PlannerConfig) -> Self {
        Self {
            directions,
            stations: StationAggregator::new(
                GooglePlacesSource::new(places.clone()),
                OcmSource::new(registry),
                config,
            ),
            amenities: AmenityLookup::new(places),
            vehicles: VehicleCatalog::default(),
        }
    }

    /// Replace the vehicle catalog.
    pub fn with_vehicles(mut self, vehicles: VehicleCatalog) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// The supported vehicles.
    pub fn vehicles(&self) -> &VehicleCatalog {
        &self.vehicles
    }

    /// Fetch every alternative route between two places, without stations.
    pub async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteCandidate>, PlannerError> {
        let response = self
            .directions
            .directions(origin, destination)
            .await
            .map_err(|e| PlannerError::RouteUnavailable {
                reason: e.to_string(),
            })?;

        convert_directions(&response).map_err(|e| PlannerError::RouteUnavailable {
            reason: e.to_string(),
        })
    }

    /// Plan a trip.
    ///
    /// The vehicle and battery level are checked before any provider is
    /// called. Routes are searched for stations one after another.
    pub async fn search(&self, request: &TripRequest) -> Result<TripPlan, PlannerError> {
        request.validate()?;
        let estimated_range_km = self
            .vehicles
            .estimate_range(&request.vehicle_model, request.battery_percent)?;

        let mut routes = self
            .fetch_routes(&request.origin, &request.destination)
            .await?;

        for route in &mut routes {
            route.stations = self.stations.stations_along(&route.waypoints).await;
        }

        info!(
            origin = %request.origin,
            destination = %request.destination,
            routes = routes.len(),
            stations = routes.iter().map(|r| r.stations.len()).sum::<usize>(),
            estimated_range_km,
            "trip search complete"
        );

        Ok(TripPlan {
            estimated_range_km,
            routes,
        })
    }

    /// Amenities around one station of a previously searched route.
    ///
    /// `route_id` and `station_index` are positions in `routes` and in that
    /// route's station list.
    pub async fn station_amenities(
        &self,
        routes: &[StoredRoute],
        route_id: usize,
        station_index: usize,
    ) -> Result<StationAmenities, PlannerError> {
        let route = routes.get(route_id).ok_or(PlannerError::RouteNotFound {
            route_id,
            available: routes.len(),
        })?;
        let station = route
            .stations
            .get(station_index)
            .ok_or(PlannerError::StationNotFound {
                route_id,
                station_index,
            })?;

        let amenities = self.amenities.around(station).await;
        info!(station = %station.name, amenities = amenities.len(), "amenity lookup complete");

        Ok(StationAmenities {
            station: station.clone(),
            amenities,
        })
    }
}

#[cfg(test)]
#[path = "trip_tests.rs"]
mod tests;
