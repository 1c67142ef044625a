//! Google Maps HTTP client.
//!
//! Provides async methods for the Directions API and Places Nearby Search.
//! Handles authentication, request timeouts and concurrency limiting.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::GoogleError;
use super::types::{
    DirectionsResponse, NearbySearchResponse, PlaceResult, STATUS_OK, STATUS_ZERO_RESULTS,
};

/// Default URL for the Directions API.
const DEFAULT_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default URL for Places Nearby Search.
const DEFAULT_PLACES_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Google Maps client.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Directions endpoint (defaults to production)
    pub directions_url: String,
    /// Nearby search endpoint (defaults to production)
    pub places_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GoogleConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            directions_url: DEFAULT_DIRECTIONS_URL.to_string(),
            places_url: DEFAULT_PLACES_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Point both endpoints at a different host (for testing).
    ///
    /// Paths are appended as `/directions/json` and `/place/nearbysearch/json`.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let base = url.into();
        let base = base.trim_end_matches('/');
        self.directions_url = format!("{base}/directions/json");
        self.places_url = format!("{base}/place/nearbysearch/json");
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Parameters for a nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub location: Coordinate,
    pub radius_meters: u32,
    pub keyword: Option<String>,
    pub place_type: Option<String>,
}

impl NearbyQuery {
    /// Search within `radius_meters` of `location` with no filters.
    pub fn new(location: Coordinate, radius_meters: u32) -> Self {
        Self {
            location,
            radius_meters,
            keyword: None,
            place_type: None,
        }
    }

    /// Restrict to places matching a free-text keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Restrict to a place type (or `|`-separated list of types).
    pub fn with_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }
}

/// Source of driving directions.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait DirectionsProvider: Send + Sync {
    /// Request driving directions, including alternative routes.
    ///
    /// Returns the raw response; callers decide how to treat its status.
    fn directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<DirectionsResponse, GoogleError>> + Send;
}

/// Source of nearby places.
pub trait PlacesProvider: Send + Sync {
    /// Search for places around a location.
    ///
    /// A `ZERO_RESULTS` status is an empty success; any other non-OK status
    /// is an error.
    fn nearby_search(
        &self,
        query: &NearbyQuery,
    ) -> impl Future<Output = Result<Vec<PlaceResult>, GoogleError>> + Send;
}

/// Google Maps API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct GoogleClient {
    http: reqwest::Client,
    api_key: String,
    directions_url: String,
    places_url: String,
    semaphore: Arc<Semaphore>,
}

impl GoogleClient {
    /// Create a new Google Maps client with the given configuration.
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            directions_url: config.directions_url,
            places_url: config.places_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Issue a GET with the API key appended and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, GoogleError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GoogleError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GoogleError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GoogleError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GoogleError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl DirectionsProvider for GoogleClient {
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectionsResponse, GoogleError> {
        debug!(origin, destination, "requesting directions");

        let params = [
            ("origin", origin.to_string()),
            ("destination", destination.to_string()),
            ("alternatives", "true".to_string()),
        ];
        self.get_json(&self.directions_url, &params).await
    }
}

impl PlacesProvider for GoogleClient {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Vec<PlaceResult>, GoogleError> {
        let response: NearbySearchResponse =
            self.get_json(&self.places_url, &nearby_params(query)).await?;
        into_results(response)
    }
}

/// Query parameters for a nearby search, excluding the key.
fn nearby_params(query: &NearbyQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("location", query.location.to_query_param()),
        ("radius", query.radius_meters.to_string()),
    ];
    if let Some(keyword) = &query.keyword {
        params.push(("keyword", keyword.clone()));
    }
    if let Some(place_type) = &query.place_type {
        params.push(("type", place_type.clone()));
    }
    params
}

/// Interpret a nearby search body status.
fn into_results(response: NearbySearchResponse) -> Result<Vec<PlaceResult>, GoogleError> {
    match response.status.as_str() {
        STATUS_OK => Ok(response.results),
        STATUS_ZERO_RESULTS => Ok(Vec::new()),
        _ => Err(GoogleError::Status {
            status: response.status,
            message: response.error_message,
        }),
    }
}
