//! Google Maps clients: Directions and Places Nearby Search.
//!
//! Both APIs authenticate with the same key and report failures through a
//! `status` field in an otherwise successful HTTP response, so they share a
//! client and error type.
//!
//! - Directions is asked for alternative routes; each alternative becomes a
//!   [`RouteCandidate`](crate::domain::RouteCandidate) via [`convert_directions`]
//! - Nearby Search serves both charging-station discovery and amenity lookup

mod client;
mod convert;
mod error;
mod types;

pub use client::{DirectionsProvider, GoogleClient, GoogleConfig, NearbyQuery, PlacesProvider};
pub use convert::{ConversionError, convert_directions};
pub use error::GoogleError;
pub use types::{
    DirectionsLeg, DirectionsResponse, DirectionsRoute, DirectionsStep, EncodedPolyline, LatLng,
    NearbySearchResponse, PlaceGeometry, PlaceResult, STATUS_OK, STATUS_ZERO_RESULTS, TextValue,
};
