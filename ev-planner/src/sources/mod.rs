//! Charging station sources.
//!
//! Each provider returns stations in its own schema and with its own notion
//! of relevance. A [`StationSource`] hides both: it queries one provider
//! around a point, drops irrelevant results, and maps the rest into the
//! common [`Station`] record.
//!
//! A failed query never aborts a route search. It is reported as
//! [`QueryOutcome::Failed`] and contributes no stations.

mod places;
mod registry;

use std::fmt;
use std::future::Future;

use crate::domain::{Coordinate, Station};

pub use places::{GooglePlacesSource, is_charging_place, place_to_station};
pub use registry::{OcmSource, poi_to_station};

/// Search radius around each sample point, in kilometers.
pub const SEARCH_RADIUS_KM: u32 = 5;

/// Result of one provider query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    /// The provider answered; the list may be empty.
    Found(Vec<T>),
    /// The provider could not be reached or returned garbage.
    Failed { reason: String },
}

impl<T> QueryOutcome<T> {
    /// Wrap a provider result, keeping only the error's message.
    pub fn from_result<E: fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => QueryOutcome::Found(items),
            Err(e) => QueryOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    /// The found items, or nothing if the query failed.
    pub fn into_items(self) -> Vec<T> {
        match self {
            QueryOutcome::Found(items) => items,
            QueryOutcome::Failed { .. } => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed { .. })
    }
}

/// A provider of charging stations near a point.
pub trait StationSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Relevant stations within the source's search radius of `point`,
    /// in provider order.
    fn stations_near(
        &self,
        point: Coordinate,
    ) -> impl Future<Output = QueryOutcome<Station>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_yields_nothing() {
        let outcome: QueryOutcome<u32> = QueryOutcome::from_result(Err("timed out"));
        assert!(outcome.is_failed());
        assert_eq!(
            outcome,
            QueryOutcome::Failed {
                reason: "timed out".into()
            }
        );
        assert!(outcome.into_items().is_empty());
    }

    #[test]
    fn found_outcome_keeps_order() {
        let outcome: QueryOutcome<u32> = QueryOutcome::from_result::<String>(Ok(vec![3, 1, 2]));
        assert!(!outcome.is_failed());
        assert_eq!(outcome.into_items(), vec![3, 1, 2]);
    }
}
