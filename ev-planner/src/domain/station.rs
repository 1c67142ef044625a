//! Charging station records.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Where a station record came from, together with the data only that
/// provider reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum StationOrigin {
    /// Google Places nearby search.
    Google {
        /// Average user rating, when the place has one.
        rating: Option<f64>,
    },
    /// Open Charge Map registry.
    Ocm {
        /// Highest power rating across all connections, 0 when unreported.
        power_kw: f64,
        /// Distinct connector type titles, in first-seen order.
        connectors: Vec<String>,
    },
}

impl StationOrigin {
    /// Short tag for logs and display ("google" or "ocm").
    pub fn tag(&self) -> &'static str {
        match self {
            StationOrigin::Google { .. } => "google",
            StationOrigin::Ocm { .. } => "ocm",
        }
    }
}

/// A charging station, normalized from either provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(flatten)]
    pub source: StationOrigin,
    pub name: String,
    pub location: Coordinate,
    pub address: String,
    pub is_operational: bool,
}

impl Station {
    /// Deduplication key: the coordinate rounded to six decimal places
    /// (about 0.1 m), joined as `"lat-lng"`.
    ///
    /// Two stations from different providers at the same rounded position
    /// share a key and are treated as the same station.
    pub fn identity_key(&self) -> String {
        // Adding 0.0 turns a rounded -0.0 into 0.0
        let round = |v: f64| (v * 1e6).round() / 1e6 + 0.0;
        format!(
            "{:.6}-{:.6}",
            round(self.location.lat()),
            round(self.location.lng())
        )
    }
}
