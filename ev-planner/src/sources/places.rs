//! Charging stations from Google Places nearby search.
//!
//! Nearby search matches loosely on keyword and type and routinely returns
//! restaurants and petrol pumps next to chargers, so each result is checked
//! by name and type before it is accepted.

use tracing::debug;

use crate::domain::{Coordinate, Station, StationOrigin};
use crate::google::{NearbyQuery, PlaceResult, PlacesProvider};

use super::{QueryOutcome, SEARCH_RADIUS_KM, StationSource};

/// Place type Google assigns to charging stations.
const EV_CHARGING_TYPE: &str = "electric_vehicle_charging_station";

/// Keyword sent with every station search.
const SEARCH_KEYWORD: &str = "EV charging station";

/// Any of these in a lowercased name marks the place as a charger.
const NAME_TOKENS: [&str; 4] = ["charge", "charging", "ev", "electric"];

/// Station source backed by Google Places.
#[derive(Debug, Clone)]
pub struct GooglePlacesSource<P> {
    places: P,
    radius_meters: u32,
}

impl<P: PlacesProvider> GooglePlacesSource<P> {
    /// Create a source searching the default 5 km radius.
    pub fn new(places: P) -> Self {
        Self {
            places,
            radius_meters: SEARCH_RADIUS_KM * 1000,
        }
    }

    fn query(&self, point: Coordinate) -> NearbyQuery {
        NearbyQuery::new(point, self.radius_meters)
            .with_keyword(SEARCH_KEYWORD)
            .with_type(EV_CHARGING_TYPE)
    }
}

impl<P: PlacesProvider> StationSource for GooglePlacesSource<P> {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn stations_near(&self, point: Coordinate) -> QueryOutcome<Station> {
        let result = self.places.nearby_search(&self.query(point)).await;
        QueryOutcome::from_result(result.map(|results| {
            let total = results.len();
            let stations: Vec<Station> = results
                .into_iter()
                .filter(is_charging_place)
                .filter_map(place_to_station)
                .collect();
            debug!(%point, total, kept = stations.len(), "google stations");
            stations
        }))
    }
}

/// Whether a nearby-search result is actually a charging station.
///
/// True if the lowercased name contains any of "charge", "charging", "ev"
/// or "electric", or the place carries the EV charging type.
pub fn is_charging_place(place: &PlaceResult) -> bool {
    let name = place.name.as_deref().unwrap_or_default().to_lowercase();
    NAME_TOKENS.iter().any(|token| name.contains(token))
        || place
            .types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(EV_CHARGING_TYPE))
}

/// Map a place into a station. Returns `None` if its location is invalid.
pub fn place_to_station(place: PlaceResult) -> Option<Station> {
    let location = place.geometry.location;
    let location = Coordinate::new(location.lat, location.lng).ok()?;

    Some(Station {
        source: StationOrigin::Google {
            rating: place.rating,
        },
        name: place.name.unwrap_or_else(|| "Unknown Station".to_string()),
        location,
        address: place
            .vicinity
            .unwrap_or_else(|| "Address not available".to_string()),
        is_operational: place.business_status.as_deref() == Some("OPERATIONAL"),
    })
}
