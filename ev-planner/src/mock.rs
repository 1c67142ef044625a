//! In-process provider mocks for tests.
//!
//! Each mock answers from a closure and records every query it receives,
//! so tests can assert both on results and on call volume.

use std::sync::{Arc, Mutex};

use crate::google::{
    DirectionsProvider, DirectionsResponse, GoogleError, LatLng, NearbyQuery, PlaceGeometry,
    PlaceResult, PlacesProvider,
};
use crate::ocm::{
    AddressInfo, ConnectionDto, ConnectionType, OcmError, PoiDto, PoiQuery, RegistryProvider,
};

type PlacesFn = dyn Fn(&NearbyQuery) -> Result<Vec<PlaceResult>, GoogleError> + Send + Sync;
type RegistryFn = dyn Fn(&PoiQuery) -> Result<Vec<PoiDto>, OcmError> + Send + Sync;
type DirectionsFn = dyn Fn(&str, &str) -> Result<DirectionsResponse, GoogleError> + Send + Sync;

/// Mock places provider.
#[derive(Clone)]
pub struct MockPlaces {
    respond: Arc<PlacesFn>,
    queries: Arc<Mutex<Vec<NearbyQuery>>>,
}

impl MockPlaces {
    pub fn new(
        respond: impl Fn(&NearbyQuery) -> Result<Vec<PlaceResult>, GoogleError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            respond: Arc::new(respond),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider that never finds anything.
    pub fn empty() -> Self {
        Self::new(|_| Ok(Vec::new()))
    }

    pub fn queries(&self) -> Vec<NearbyQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl PlacesProvider for MockPlaces {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Vec<PlaceResult>, GoogleError> {
        self.queries.lock().unwrap().push(query.clone());
        (self.respond)(query)
    }
}

/// Mock EV registry.
#[derive(Clone)]
pub struct MockRegistry {
    respond: Arc<RegistryFn>,
    queries: Arc<Mutex<Vec<PoiQuery>>>,
}

impl MockRegistry {
    pub fn new(
        respond: impl Fn(&PoiQuery) -> Result<Vec<PoiDto>, OcmError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Arc::new(respond),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn empty() -> Self {
        Self::new(|_| Ok(Vec::new()))
    }

    pub fn queries(&self) -> Vec<PoiQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl RegistryProvider for MockRegistry {
    async fn poi(&self, query: &PoiQuery) -> Result<Vec<PoiDto>, OcmError> {
        self.queries.lock().unwrap().push(query.clone());
        (self.respond)(query)
    }
}

/// Mock directions provider.
#[derive(Clone)]
pub struct MockDirections {
    respond: Arc<DirectionsFn>,
    calls: Arc<Mutex<usize>>,
}

impl MockDirections {
    pub fn new(
        respond: impl Fn(&str, &str) -> Result<DirectionsResponse, GoogleError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            respond: Arc::new(respond),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Always answer with the given JSON body.
    pub fn from_json(json: &str) -> Self {
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        Self::new(move |_, _| Ok(response.clone()))
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl DirectionsProvider for MockDirections {
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectionsResponse, GoogleError> {
        *self.calls.lock().unwrap() += 1;
        (self.respond)(origin, destination)
    }
}

/// A minimal nearby-search result.
pub fn place(name: &str, lat: f64, lng: f64) -> PlaceResult {
    PlaceResult {
        name: Some(name.to_string()),
        geometry: PlaceGeometry {
            location: LatLng { lat, lng },
        },
        vicinity: None,
        rating: None,
        business_status: None,
        types: Vec::new(),
    }
}

/// A registry entry with the given `(connector title, power)` connections.
pub fn poi(title: &str, lat: f64, lng: f64, connections: &[(&str, Option<f64>)]) -> PoiDto {
    PoiDto {
        address_info: Some(AddressInfo {
            title: Some(title.to_string()),
            latitude: Some(lat),
            longitude: Some(lng),
            address_line1: Some(format!("{title} Road")),
        }),
        connections: connections
            .iter()
            .map(|(connector, power_kw)| ConnectionDto {
                power_kw: *power_kw,
                connection_type: Some(ConnectionType {
                    title: Some(connector.to_string()),
                }),
            })
            .collect(),
        status_type: None,
    }
}
