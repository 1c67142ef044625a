//! Application configuration from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;

use crate::google::GoogleConfig;
use crate::ocm::OcmConfig;
use crate::planner::PlannerConfig;
use crate::session::SessionConfig;

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub ocm_api_key: String,
    pub addr: SocketAddr,
    /// Per-request timeout for every provider client.
    pub provider_timeout_secs: u64,
    /// In-flight request cap for each provider client.
    pub provider_max_concurrent: usize,
    /// Sample points searched at once per route.
    pub station_query_concurrency: usize,
    pub session_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_api_key: String::new(),
            ocm_api_key: String::new(),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            provider_timeout_secs: 30,
            provider_max_concurrent: 5,
            station_query_concurrency: PlannerConfig::default().max_concurrent_queries,
            session_ttl: SessionConfig::default().ttl,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables, after
    /// loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!(error = %e, "could not read .env file");
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, defaulting unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let google_api_key = lookup("GOOGLE_MAPS_API_KEY").unwrap_or_default();
        if google_api_key.is_empty() {
            warn!("GOOGLE_MAPS_API_KEY not set; route and place searches will fail");
        }
        let ocm_api_key = lookup("OPEN_CHARGE_API_KEY").unwrap_or_default();
        if ocm_api_key.is_empty() {
            warn!("OPEN_CHARGE_API_KEY not set; registry searches will fail");
        }

        Ok(Self {
            google_api_key,
            ocm_api_key,
            addr: parse_or(&lookup, "EV_PLANNER_ADDR", defaults.addr)?,
            provider_timeout_secs: parse_or(
                &lookup,
                "PROVIDER_TIMEOUT_SECS",
                defaults.provider_timeout_secs,
            )?,
            provider_max_concurrent: parse_or(
                &lookup,
                "PROVIDER_MAX_CONCURRENT",
                defaults.provider_max_concurrent,
            )?,
            station_query_concurrency: parse_or(
                &lookup,
                "STATION_QUERY_CONCURRENCY",
                defaults.station_query_concurrency,
            )?,
            session_ttl: parse_or(&lookup, "SESSION_TTL_SECS", defaults.session_ttl.as_secs())
                .map(Duration::from_secs)?,
        })
    }

    pub fn google_config(&self) -> GoogleConfig {
        GoogleConfig::new(&self.google_api_key)
            .with_timeout(self.provider_timeout_secs)
            .with_max_concurrent(self.provider_max_concurrent)
    }

    pub fn ocm_config(&self) -> OcmConfig {
        OcmConfig::new(&self.ocm_api_key)
            .with_timeout(self.provider_timeout_secs)
            .with_max_concurrent(self.provider_max_concurrent)
    }

    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::default().with_concurrency(self.station_query_concurrency)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            ttl: self.session_ttl,
            ..SessionConfig::default()
        }
    }
}

/// Parse a variable, or use `default` when it is unset or blank.
fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(env(&[])).unwrap();

        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.provider_timeout_secs, 30);
        assert_eq!(config.provider_max_concurrent, 5);
        assert_eq!(config.station_query_concurrency, 4);
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert!(config.google_api_key.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(env(&[
            ("GOOGLE_MAPS_API_KEY", "g-key"),
            ("OPEN_CHARGE_API_KEY", "o-key"),
            ("EV_PLANNER_ADDR", "0.0.0.0:8080"),
            ("PROVIDER_TIMEOUT_SECS", "10"),
            ("PROVIDER_MAX_CONCURRENT", "2"),
            ("STATION_QUERY_CONCURRENCY", "1"),
            ("SESSION_TTL_SECS", " 600 "),
        ]))
        .unwrap();

        assert_eq!(config.google_api_key, "g-key");
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.session_ttl, Duration::from_secs(600));

        let google = config.google_config();
        assert_eq!(google.api_key, "g-key");
        assert_eq!(google.timeout_secs, 10);
        assert_eq!(google.max_concurrent, 2);

        let ocm = config.ocm_config();
        assert_eq!(ocm.api_key, "o-key");
        assert_eq!(ocm.timeout_secs, 10);

        assert_eq!(config.planner_config().max_concurrent_queries, 1);
        assert_eq!(config.session_config().ttl, Duration::from_secs(600));
        assert_eq!(config.session_config().max_capacity, 10_000);
    }

    #[test]
    fn blank_value_uses_default() {
        let config = AppConfig::from_lookup(env(&[("PROVIDER_TIMEOUT_SECS", "")])).unwrap();
        assert_eq!(config.provider_timeout_secs, 30);
    }

    #[test]
    fn unparseable_value_rejected() {
        let err = AppConfig::from_lookup(env(&[("EV_PLANNER_ADDR", "localhost")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "EV_PLANNER_ADDR",
                value: "localhost".into(),
            }
        );
    }
}
