//! Station search along a route.
//!
//! Querying every waypoint of a long route would multiply provider calls
//! with route length, so the waypoints are thinned to an evenly strided,
//! capped sample first. Both sources are queried at each sample point and
//! the combined results are deduplicated across the whole route.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::domain::{Coordinate, Station};
use crate::sources::{QueryOutcome, StationSource};

use super::config::PlannerConfig;

/// Pick the waypoints to query.
///
/// Takes every `stride`-th waypoint from index 0, where
/// `stride = max(1, len / divisor)`, then keeps at most `max_points`.
pub fn sample_points(
    waypoints: &[Coordinate],
    divisor: usize,
    max_points: usize,
) -> Vec<Coordinate> {
    let stride = (waypoints.len() / divisor.max(1)).max(1);
    waypoints
        .iter()
        .step_by(stride)
        .take(max_points)
        .copied()
        .collect()
}

/// Concatenate station batches, keeping the first station seen for each
/// identity key.
pub fn merge_stations(batches: impl IntoIterator<Item = Vec<Station>>) -> Vec<Station> {
    let mut seen = HashSet::new();
    batches
        .into_iter()
        .flatten()
        .filter(|s| seen.insert(s.identity_key()))
        .collect()
}

/// Finds charging stations along a route using two station sources.
///
/// At each sample point the primary source's results come before the
/// secondary's.
#[derive(Debug, Clone)]
pub struct StationAggregator<A, B> {
    primary: A,
    secondary: B,
    config: PlannerConfig,
}

impl<A: StationSource, B: StationSource> StationAggregator<A, B> {
    /// Create an aggregator over two sources.
    pub fn new(primary: A, secondary: B, config: PlannerConfig) -> Self {
        Self {
            primary,
            secondary,
            config,
        }
    }

    /// Deduplicated stations along a route, in discovery order.
    ///
    /// An empty waypoint list makes no queries. Failed queries contribute
    /// nothing and are logged.
    pub async fn stations_along(&self, waypoints: &[Coordinate]) -> Vec<Station> {
        let samples = sample_points(
            waypoints,
            self.config.sample_divisor,
            self.config.max_sample_points,
        );
        let sample_count = samples.len();

        let queries: Vec<_> = samples
            .into_iter()
            .map(|point| self.query_point(point))
            .collect();

        // `buffered` yields in input order, so merging is deterministic
        // whatever the concurrency.
        let batches: Vec<(Vec<Station>, usize)> = stream::iter(queries)
            .buffered(self.config.max_concurrent_queries.max(1))
            .collect()
            .await;

        let failed: usize = batches.iter().map(|(_, f)| f).sum();
        let stations = merge_stations(batches.into_iter().map(|(s, _)| s));

        if failed > 0 {
            warn!(failed, sample_count, "some station queries failed");
        }
        info!(
            waypoints = waypoints.len(),
            sample_count,
            stations = stations.len(),
            "station search complete"
        );

        stations
    }

    /// Query both sources at one point. Returns the combined stations and
    /// the number of failed queries.
    async fn query_point(&self, point: Coordinate) -> (Vec<Station>, usize) {
        let (primary, secondary) = tokio::join!(
            self.primary.stations_near(point),
            self.secondary.stations_near(point)
        );
        let mut failed = 0;
        for (source, outcome) in [
            (self.primary.name(), &primary),
            (self.secondary.name(), &secondary),
        ] {
            if let QueryOutcome::Failed { reason } = outcome {
                warn!(source, %point, %reason, "station query failed");
                failed += 1;
            }
        }

        let mut stations = primary.into_items();
        stations.extend(secondary.into_items());
        (stations, failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationOrigin;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn line(n: usize) -> Vec<Coordinate> {
        (0..n).map(|i| coord(i as f64 * 0.01, 77.0)).collect()
    }

    fn station(name: &str, source: StationOrigin, lat: f64, lng: f64) -> Station {
        Station {
            source,
            name: name.to_string(),
            location: coord(lat, lng),
            address: String::new(),
            is_operational: true,
        }
    }

    fn google(name: &str, lat: f64, lng: f64) -> Station {
        station(name, StationOrigin::Google { rating: None }, lat, lng)
    }

    fn ocm(name: &str, lat: f64, lng: f64) -> Station {
        station(
            name,
            StationOrigin::Ocm {
                power_kw: 50.0,
                connectors: vec!["CCS".into()],
            },
            lat,
            lng,
        )
    }

    /// Station source answering from a closure and recording each point.
    #[derive(Clone)]
    struct FakeSource {
        name: &'static str,
        respond: Arc<dyn Fn(Coordinate) -> QueryOutcome<Station> + Send + Sync>,
        points: Arc<Mutex<Vec<Coordinate>>>,
    }

    impl FakeSource {
        fn new(
            name: &'static str,
            respond: impl Fn(Coordinate) -> QueryOutcome<Station> + Send + Sync + 'static,
        ) -> Self {
            Self {
                name,
                respond: Arc::new(respond),
                points: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn points(&self) -> Vec<Coordinate> {
            self.points.lock().unwrap().clone()
        }
    }

    impl StationSource for FakeSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn stations_near(&self, point: Coordinate) -> QueryOutcome<Station> {
            self.points.lock().unwrap().push(point);
            (self.respond)(point)
        }
    }

    fn silent(name: &'static str) -> FakeSource {
        FakeSource::new(name, |_| QueryOutcome::Found(Vec::new()))
    }

    #[test]
    fn short_route_samples_every_point() {
        let waypoints = line(7);
        assert_eq!(sample_points(&waypoints, 10, 20), waypoints);
    }

    #[test]
    fn stride_floors_division() {
        // 25 / 10 = 2 → indices 0, 2, 4, ..., 24
        let waypoints = line(25);
        let samples = sample_points(&waypoints, 10, 20);
        assert_eq!(samples.len(), 13);
        assert_eq!(samples[1], waypoints[2]);
        assert_eq!(samples[12], waypoints[24]);
    }

    #[test]
    fn long_route_capped_keeping_earliest() {
        // 250 / 10 = 25 → 10 samples, under the cap
        let waypoints = line(250);
        let samples = sample_points(&waypoints, 10, 20);
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0], waypoints[0]);

        // Cap applies once the stride still leaves too many points
        let samples = sample_points(&waypoints, 50, 20);
        assert_eq!(samples.len(), 20);
        assert_eq!(samples[19], waypoints[19 * 5]);
    }

    #[test]
    fn empty_route_has_no_samples() {
        assert!(sample_points(&[], 10, 20).is_empty());
    }

    #[test]
    fn merge_keeps_first_occurrence() {
        let merged = merge_stations([
            vec![google("G1", 28.0, 77.0), ocm("O1", 28.0, 77.0)],
            vec![ocm("O2", 28.1, 77.1), google("G2", 28.0, 77.0)],
        ]);
        let names: Vec<_> = merged.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["G1", "O2"]);
    }

    #[test]
    fn merge_treats_signed_zero_as_one_position() {
        let merged = merge_stations([
            vec![google("Greenwich West", 51.4779, -0.000_000_2)],
            vec![ocm("Greenwich East", 51.4779, 0.000_000_2)],
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Greenwich West");
    }

    #[tokio::test]
    async fn queries_both_sources_at_each_sample() {
        let a = silent("a");
        let b = silent("b");
        let aggregator = StationAggregator::new(a.clone(), b.clone(), PlannerConfig::default());

        let waypoints = line(9);
        aggregator.stations_along(&waypoints).await;

        assert_eq!(a.points(), waypoints);
        assert_eq!(b.points(), waypoints);
    }

    #[tokio::test]
    async fn primary_results_precede_secondary() {
        let a = FakeSource::new("a", |p| {
            QueryOutcome::Found(vec![google("google", p.lat(), 77.5)])
        });
        let b = FakeSource::new("b", |p| QueryOutcome::Found(vec![ocm("ocm", p.lat(), 77.6)]));
        let aggregator = StationAggregator::new(a, b, PlannerConfig::default());

        let stations = aggregator.stations_along(&line(2)).await;
        let tags: Vec<_> = stations.iter().map(|s| s.source.tag()).collect();
        assert_eq!(tags, ["google", "ocm", "google", "ocm"]);
    }

    #[tokio::test]
    async fn duplicates_across_sources_keep_primary() {
        let a = FakeSource::new("a", |_| QueryOutcome::Found(vec![google("Shared", 28.5, 77.5)]));
        let b = FakeSource::new("b", |_| QueryOutcome::Found(vec![ocm("Shared OCM", 28.5, 77.5)]));
        let aggregator = StationAggregator::new(a, b, PlannerConfig::default());

        // Every sample point finds the same station from both sources
        let stations = aggregator.stations_along(&line(5)).await;
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Shared");
        assert_eq!(stations[0].source.tag(), "google");
    }

    #[tokio::test]
    async fn failing_source_does_not_abort_search() {
        let a = FakeSource::new("a", |_| QueryOutcome::Failed {
            reason: "timeout".into(),
        });
        let b = FakeSource::new("b", |p| QueryOutcome::Found(vec![ocm("O", p.lat(), 77.6)]));
        let aggregator = StationAggregator::new(a, b, PlannerConfig::default());

        let stations = aggregator.stations_along(&line(3)).await;
        assert_eq!(stations.len(), 3);
    }

    #[tokio::test]
    async fn empty_route_makes_no_queries() {
        let a = silent("a");
        let b = silent("b");
        let aggregator = StationAggregator::new(a.clone(), b.clone(), PlannerConfig::default());

        assert!(aggregator.stations_along(&[]).await.is_empty());
        assert!(a.points().is_empty());
        assert!(b.points().is_empty());
    }

    #[tokio::test]
    async fn order_independent_of_concurrency() {
        let respond = |p: Coordinate| {
            QueryOutcome::Found(vec![
                google("g", p.lat(), 77.5),
                google("shared", (p.lat() * 10.0).floor() / 10.0, 77.9),
            ])
        };
        let sequential = StationAggregator::new(
            FakeSource::new("a", respond),
            silent("b"),
            PlannerConfig::default().with_concurrency(1),
        );
        let parallel = StationAggregator::new(
            FakeSource::new("a", respond),
            silent("b"),
            PlannerConfig::default().with_concurrency(8),
        );

        let waypoints = line(60);
        assert_eq!(
            sequential.stations_along(&waypoints).await,
            parallel.stations_along(&waypoints).await
        );
    }

    proptest! {
        #[test]
        fn short_routes_sample_every_waypoint(n in 0usize..=10) {
            let waypoints = line(n);
            prop_assert_eq!(sample_points(&waypoints, 10, 20).len(), n);
        }

        #[test]
        fn long_routes_sample_at_most_cap(n in 201usize..2000) {
            let waypoints = line(n);
            let samples = sample_points(&waypoints, 10, 20);
            prop_assert!(samples.len() <= 20);
            prop_assert_eq!(samples[0], waypoints[0]);
        }

        #[test]
        fn merged_keys_are_unique(lats in proptest::collection::vec(0u8..20, 0..60)) {
            let batch: Vec<Station> = lats
                .iter()
                .map(|l| google("s", f64::from(*l) * 0.1, 77.0))
                .collect();
            let merged = merge_stations([batch]);
            let keys: HashSet<_> = merged.iter().map(|s| s.identity_key()).collect();
            prop_assert_eq!(keys.len(), merged.len());
        }
    }
}
