//! Open Charge Map API client.

use std::future::Future;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio::sync::Semaphore;

use crate::domain::Coordinate;

use super::error::OcmError;
use super::types::PoiDto;

/// Default base URL for the Open Charge Map API.
const DEFAULT_BASE_URL: &str = "https://api.openchargemap.io/v3";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Open Charge Map client.
#[derive(Debug, Clone)]
pub struct OcmConfig {
    /// API key for x-api-key header authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OcmConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
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

/// Parameters for a POI search.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiQuery {
    pub location: Coordinate,
    pub distance_km: u32,
    pub max_results: u32,
    /// Only return sites the registry marks as operational.
    pub operational_only: bool,
}

impl PoiQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("latitude", self.location.lat().to_string()),
            ("longitude", self.location.lng().to_string()),
            ("distance", self.distance_km.to_string()),
            ("distanceunit", "km".to_string()),
            ("maxresults", self.max_results.to_string()),
            ("compact", "true".to_string()),
            ("verbose", "false".to_string()),
        ];
        if self.operational_only {
            params.push(("operationalstatus", "Operational".to_string()));
        }
        params
    }
}

/// Source of EV registry entries.
///
/// This abstraction allows the station search to be tested with mock data.
pub trait RegistryProvider: Send + Sync {
    /// Fetch charging sites near a location.
    fn poi(&self, query: &PoiQuery) -> impl Future<Output = Result<Vec<PoiDto>, OcmError>> + Send;
}

/// Client for the Open Charge Map API.
#[derive(Debug, Clone)]
pub struct OcmClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl OcmClient {
    /// Create a new Open Charge Map client.
    pub fn new(config: OcmConfig) -> Result<Self, OcmError> {
        let mut headers = HeaderMap::new();

        let api_key_header = HeaderValue::from_str(&config.api_key).map_err(|_| OcmError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key_header);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }
}

impl RegistryProvider for OcmClient {
    async fn poi(&self, query: &PoiQuery) -> Result<Vec<PoiDto>, OcmError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| OcmError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/poi", self.base_url);

        let response = self.http.get(&url).query(&query.params()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(OcmError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| OcmError::Json {
            message: e.to_string(),
        })
    }
}
