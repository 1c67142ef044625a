//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{NearbyAmenities, RouteCandidate, Station, VehicleProfile};

/// Body of a route search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Origin address or place name
    pub from: String,

    /// Destination address or place name
    pub to: String,

    /// Model name from the vehicle catalog
    pub vehicle_model: String,

    /// Battery level in percent; range-checked by the handler
    pub battery_level: i64,
}

/// Result of a route search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Session the routes were stored under
    pub session_id: String,

    pub estimated_range_km: f64,

    pub routes: Vec<RouteCandidate>,

    /// Note for the user, e.g. when there are no alternatives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Query for a station's amenities.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AmenitiesQuery {
    pub route_id: usize,
    pub station_index: usize,
}

/// A station and the amenities around it.
#[derive(Debug, Serialize)]
pub struct AmenitiesResponse {
    pub station: Station,
    pub amenities: NearbyAmenities,
}

/// Supported vehicles.
#[derive(Debug, Serialize)]
pub struct VehiclesResponse {
    pub vehicles: Vec<VehicleProfile>,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amenities_query_defaults_to_first_station() {
        let query: AmenitiesQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.route_id, 0);
        assert_eq!(query.station_index, 0);
    }

    #[test]
    fn message_omitted_when_absent() {
        let response = SearchResponse {
            session_id: "abc".into(),
            estimated_range_km: 156.0,
            routes: Vec::new(),
            message: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["estimated_range_km"], 156.0);
    }
}
