//! Amenities around a charging station.

use tracing::{debug, warn};

use crate::domain::{
    Amenity, AmenityCategory, Coordinate, NearbyAmenities, Station, distance_meters,
};
use crate::google::{NearbyQuery, PlaceResult, PlacesProvider};

/// Looks up places to eat, rest and visit near a station.
#[derive(Debug, Clone)]
pub struct AmenityLookup<P> {
    places: P,
}

impl<P: PlacesProvider> AmenityLookup<P> {
    pub fn new(places: P) -> Self {
        Self { places }
    }

    /// Query every category around the station, one after another.
    ///
    /// A failed category is logged and left empty; the others are kept.
    pub async fn around(&self, station: &Station) -> NearbyAmenities {
        let mut nearby = NearbyAmenities::default();

        for category in AmenityCategory::ALL {
            let query = NearbyQuery::new(station.location, category.radius_meters())
                .with_type(category.place_type());

            match self.places.nearby_search(&query).await {
                Ok(results) => {
                    let found: Vec<Amenity> = results
                        .into_iter()
                        .filter_map(|place| to_amenity(place, category, station.location))
                        .take(category.limit())
                        .collect();
                    debug!(station = %station.name, %category, found = found.len(), "amenities");
                    *nearby.category_mut(category) = found;
                }
                Err(e) => {
                    warn!(station = %station.name, %category, error = %e, "amenity search failed");
                }
            }
        }

        nearby
    }
}

/// Map a place into an amenity of the given category.
///
/// Restrooms are proxied by malls and shops, so they are named after the
/// venue and carry no rating.
fn to_amenity(
    place: PlaceResult,
    category: AmenityCategory,
    origin: Coordinate,
) -> Option<Amenity> {
    let location = Coordinate::new(place.geometry.location.lat, place.geometry.location.lng).ok()?;
    let venue = place.name.unwrap_or_else(|| "Unknown".to_string());

    let (name, rating) = match category {
        AmenityCategory::Restroom => (format!("Restroom at {venue}"), None),
        _ => (venue, place.rating),
    };

    Some(Amenity {
        name,
        location,
        category,
        rating,
        vicinity: place.vicinity,
        distance_meters: distance_meters(origin, location),
    })
}
