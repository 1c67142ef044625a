//! Configuration for route station search.

/// Parameters bounding how many provider queries a search makes.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Waypoints are sampled every `len / sample_divisor` points.
    pub sample_divisor: usize,

    /// Maximum sample points queried per route.
    /// Each sample point costs one query per station source.
    pub max_sample_points: usize,

    /// How many sample points may be in flight at once.
    /// Results are merged in sample order regardless; 1 is strictly sequential.
    pub max_concurrent_queries: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        sample_divisor: usize,
        max_sample_points: usize,
        max_concurrent_queries: usize,
    ) -> Self {
        Self {
            sample_divisor,
            max_sample_points,
            max_concurrent_queries,
        }
    }

    /// Set the query concurrency.
    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.max_concurrent_queries = n;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            sample_divisor: 10,
            max_sample_points: 20,
            max_concurrent_queries: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.sample_divisor, 10);
        assert_eq!(config.max_sample_points, 20);
        assert_eq!(config.max_concurrent_queries, 4);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(5, 8, 2).with_concurrency(1);

        assert_eq!(config.sample_divisor, 5);
        assert_eq!(config.max_sample_points, 8);
        assert_eq!(config.max_concurrent_queries, 1);
    }
}
