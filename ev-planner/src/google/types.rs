//! Google Maps API response DTOs.
//!
//! These types map directly to the Directions and Places Nearby Search JSON
//! responses. Fields the provider may omit are `Option` or defaulted.

use serde::Deserialize;

/// Body status meaning the request succeeded with results.
pub const STATUS_OK: &str = "OK";

/// Body status meaning the request succeeded but matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// A `{lat, lng}` pair as the provider sends it. Unvalidated.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A `{value, text}` quantity; `value` is meters or seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: f64,
    #[serde(default)]
    pub text: String,
}

/// Response from the Directions API.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,

    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,

    pub error_message: Option<String>,
}

/// One alternative route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

/// A leg between two waypoints of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,

    #[serde(default)]
    pub steps: Vec<DirectionsStep>,
}

/// A single navigation instruction within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsStep {
    pub end_location: LatLng,
    pub polyline: Option<EncodedPolyline>,
}

/// Encoded polyline of a step.
#[derive(Debug, Clone, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

/// Response from Places Nearby Search.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,

    #[serde(default)]
    pub results: Vec<PlaceResult>,

    pub error_message: Option<String>,
}

/// A place returned by nearby search.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub name: Option<String>,
    pub geometry: PlaceGeometry,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub business_status: Option<String>,

    #[serde(default)]
    pub types: Vec<String>,
}

/// Geometry wrapper around a place's location.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceGeometry {
    pub location: LatLng,
}
