//! Open Charge Map registry client.
//!
//! Open Charge Map is a community-maintained registry of charging sites.
//! Unlike a general places search, every result is a charging site, but
//! entries may lack connector or location data.

mod client;
mod error;
mod types;

pub use client::{OcmClient, OcmConfig, PoiQuery, RegistryProvider};
pub use error::OcmError;
pub use types::{AddressInfo, ConnectionDto, ConnectionType, PoiDto, StatusType};
