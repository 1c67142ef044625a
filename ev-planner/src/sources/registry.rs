//! Charging stations from the Open Charge Map registry.
//!
//! Every registry entry is a charging site, but only entries that name at
//! least one connector type are useful to a driver, so the rest are dropped.

use tracing::debug;

use crate::domain::{Coordinate, Station, StationOrigin};
use crate::ocm::{PoiDto, PoiQuery, RegistryProvider};

use super::{QueryOutcome, SEARCH_RADIUS_KM, StationSource};

/// Maximum registry entries per query.
const MAX_RESULTS: u32 = 10;

/// Station source backed by Open Charge Map.
#[derive(Debug, Clone)]
pub struct OcmSource<R> {
    registry: R,
    distance_km: u32,
    max_results: u32,
}

impl<R: RegistryProvider> OcmSource<R> {
    /// Create a source searching the default 5 km radius, 10 results.
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            distance_km: SEARCH_RADIUS_KM,
            max_results: MAX_RESULTS,
        }
    }

    fn query(&self, point: Coordinate) -> PoiQuery {
        PoiQuery {
            location: point,
            distance_km: self.distance_km,
            max_results: self.max_results,
            operational_only: true,
        }
    }
}

impl<R: RegistryProvider> StationSource for OcmSource<R> {
    fn name(&self) -> &'static str {
        "ocm"
    }

    async fn stations_near(&self, point: Coordinate) -> QueryOutcome<Station> {
        let result = self.registry.poi(&self.query(point)).await;
        QueryOutcome::from_result(result.map(|pois| {
            let total = pois.len();
            let stations: Vec<Station> = pois.into_iter().filter_map(poi_to_station).collect();
            debug!(%point, total, kept = stations.len(), "ocm stations");
            stations
        }))
    }
}

/// Map a registry entry into a station.
///
/// Returns `None` when no connection names a connector type, or the entry
/// has no valid location.
pub fn poi_to_station(poi: PoiDto) -> Option<Station> {
    let mut connectors: Vec<String> = Vec::new();
    for title in poi
        .connections
        .iter()
        .filter_map(|c| c.connection_type.as_ref()?.title.as_deref())
        .filter(|t| !t.is_empty())
    {
        if !connectors.iter().any(|c| c == title) {
            connectors.push(title.to_string());
        }
    }
    if connectors.is_empty() {
        return None;
    }

    let power_kw = poi
        .connections
        .iter()
        .filter_map(|c| c.power_kw)
        .filter(|kw| *kw > 0.0)
        .fold(0.0, f64::max);

    let info = poi.address_info.unwrap_or_default();
    let location = Coordinate::new(info.latitude?, info.longitude?).ok()?;

    Some(Station {
        source: StationOrigin::Ocm {
            power_kw,
            connectors,
        },
        name: info.title.unwrap_or_else(|| "Unknown Station".to_string()),
        location,
        address: info
            .address_line1
            .unwrap_or_else(|| "Address not available".to_string()),
        is_operational: poi
            .status_type
            .and_then(|s| s.is_operational)
            .unwrap_or(true),
    })
}
