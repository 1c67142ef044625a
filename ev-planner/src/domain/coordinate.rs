//! Geographic coordinates and geodesic distance.

use std::fmt;

use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};

/// Error returned when constructing a coordinate outside the valid range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lng}): {reason}")]
pub struct InvalidCoordinate {
    lat: f64,
    lng: f64,
    reason: &'static str,
}

/// A WGS-84 position in degrees.
///
/// Latitude is always within -90..=90 and longitude within -180..=180.
/// Any `Coordinate` value is valid by construction.
///
/// # Examples
///
/// ```
/// use ev_planner::domain::Coordinate;
///
/// let delhi = Coordinate::new(28.6139, 77.2090).unwrap();
/// assert_eq!(delhi.lat(), 28.6139);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

/// Unchecked wire form, validated on deserialization.
#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinate {
                lat,
                lng,
                reason: "must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                lat,
                lng,
                reason: "latitude must be within -90..=90",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate {
                lat,
                lng,
                reason: "longitude must be within -180..=180",
            });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Format as `"lat,lng"`, the form the places provider expects.
    pub fn to_query_param(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    fn to_point(self) -> Point<f64> {
        // geo points are (x, y) = (lng, lat)
        Point::new(self.lng, self.lat)
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        RawCoordinate {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Geodesic surface distance between two coordinates, in whole meters.
///
/// Uses the WGS-84 ellipsoid (Karney's algorithm) rather than a spherical
/// approximation.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> u64 {
    Geodesic.distance(a.to_point(), b.to_point()).round() as u64
}
