//! Domain types for the EV trip planner.
//!
//! This module contains the core domain model types: coordinates, routes,
//! stations, amenities and vehicles. Types with invariants enforce them at
//! construction time, so code that receives these types can trust their
//! validity.

mod amenity;
mod coordinate;
mod error;
mod route;
mod station;
mod vehicle;

pub use amenity::{Amenity, AmenityCategory, NearbyAmenities};
pub use coordinate::{Coordinate, InvalidCoordinate, distance_meters};
pub use error::DomainError;
pub use route::{RouteCandidate, StoredRoute};
pub use station::{Station, StationOrigin};
pub use vehicle::{VehicleCatalog, VehicleProfile};
