//! EV trip planner.
//!
//! This module answers: "which routes can I take, and where can I charge
//! along each of them?"
//!
//! A search fetches alternative routes, samples each route's waypoints, and
//! asks two station sources about every sample point. Results are merged
//! into one deduplicated station list per route. Amenities are looked up
//! separately, for a single station the user picks.

mod aggregate;
mod amenities;
mod config;
mod error;
mod trip;

pub use aggregate::{StationAggregator, merge_stations, sample_points};
pub use amenities::AmenityLookup;
pub use config::PlannerConfig;
pub use error::PlannerError;
pub use trip::{StationAmenities, TripPlan, TripPlanner, TripRequest};
