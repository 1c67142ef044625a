//! Web layer for the EV trip planner.
//!
//! Provides JSON endpoints for vehicle lookup, route search and station
//! amenities. Searches are remembered per session so amenity requests can
//! refer to stations by position.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, SESSION_COOKIE, SESSION_HEADER, SINGLE_ROUTE_MESSAGE, create_router};
pub use state::AppState;
