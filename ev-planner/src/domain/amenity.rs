//! Amenities near a charging station.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Kind of amenity searched for around a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    Restaurant,
    Cafe,
    Restroom,
    TouristSpot,
}

impl AmenityCategory {
    /// All categories, in the order they are queried.
    pub const ALL: [AmenityCategory; 4] = [
        AmenityCategory::Restaurant,
        AmenityCategory::Cafe,
        AmenityCategory::TouristSpot,
        AmenityCategory::Restroom,
    ];

    /// Places provider `type` filter for this category.
    ///
    /// There is no restroom type, so shopping malls and convenience stores
    /// stand in for them.
    pub fn place_type(&self) -> &'static str {
        match self {
            AmenityCategory::Restaurant => "restaurant",
            AmenityCategory::Cafe => "cafe",
            AmenityCategory::TouristSpot => "tourist_attraction",
            AmenityCategory::Restroom => "shopping_mall|convenience_store",
        }
    }

    /// Search radius around the station, in meters.
    pub fn radius_meters(&self) -> u32 {
        match self {
            AmenityCategory::Restaurant | AmenityCategory::Cafe => 1000,
            AmenityCategory::TouristSpot => 2000,
            AmenityCategory::Restroom => 500,
        }
    }

    /// How many results to keep.
    pub fn limit(&self) -> usize {
        match self {
            AmenityCategory::Restroom => 3,
            _ => 5,
        }
    }
}

impl fmt::Display for AmenityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AmenityCategory::Restaurant => "restaurant",
            AmenityCategory::Cafe => "cafe",
            AmenityCategory::Restroom => "restroom",
            AmenityCategory::TouristSpot => "tourist_spot",
        };
        f.write_str(s)
    }
}

/// A place near a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    pub location: Coordinate,
    pub category: AmenityCategory,
    pub rating: Option<f64>,
    pub vicinity: Option<String>,
    /// Geodesic distance from the station, whole meters.
    pub distance_meters: u64,
}

/// Amenities around one station, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NearbyAmenities {
    pub restaurant: Vec<Amenity>,
    pub cafe: Vec<Amenity>,
    pub restroom: Vec<Amenity>,
    pub tourist_spot: Vec<Amenity>,
}

impl NearbyAmenities {
    /// Mutable access to the list for a category.
    pub fn category_mut(&mut self, category: AmenityCategory) -> &mut Vec<Amenity> {
        match category {
            AmenityCategory::Restaurant => &mut self.restaurant,
            AmenityCategory::Cafe => &mut self.cafe,
            AmenityCategory::Restroom => &mut self.restroom,
            AmenityCategory::TouristSpot => &mut self.tourist_spot,
        }
    }

    /// Total number of amenities across all categories.
    pub fn len(&self) -> usize {
        self.restaurant.len() + self.cafe.len() + self.restroom.len() + self.tourist_spot.len()
    }

    /// Returns true if no amenities were found in any category.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
