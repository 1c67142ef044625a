//! Vehicle range lookup.

use serde::Serialize;

use super::error::DomainError;

/// A vehicle model and its range on a full battery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleProfile {
    pub model: String,
    pub max_range_km: f64,
}

/// Static catalog of supported vehicle models.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    profiles: Vec<VehicleProfile>,
}

impl VehicleCatalog {
    /// Create a catalog from `(model, max_range_km)` pairs.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let profiles = entries
            .into_iter()
            .map(|(model, max_range_km)| VehicleProfile {
                model: model.to_string(),
                max_range_km,
            })
            .collect();
        Self { profiles }
    }

    /// Look up a model by exact name.
    pub fn get(&self, model: &str) -> Option<&VehicleProfile> {
        self.profiles.iter().find(|p| p.model == model)
    }

    /// All profiles, in catalog order.
    pub fn profiles(&self) -> &[VehicleProfile] {
        &self.profiles
    }

    /// Range achievable with the given battery level, in km, rounded to
    /// one decimal place.
    ///
    /// `battery_percent` must be within 0..=100.
    pub fn estimate_range(&self, model: &str, battery_percent: u8) -> Result<f64, DomainError> {
        if battery_percent > 100 {
            return Err(DomainError::InvalidBattery(battery_percent));
        }
        let profile = self
            .get(model)
            .ok_or_else(|| DomainError::UnknownVehicle(model.to_string()))?;

        let range = f64::from(battery_percent) / 100.0 * profile.max_range_km;
        Ok((range * 10.0).round() / 10.0)
    }
}

impl Default for VehicleCatalog {
    fn default() -> Self {
        Self::new([
            ("Model X", 500.0),
            ("Model Y", 450.0),
            ("Tata Nexon", 312.0),
            ("Mahindra e2o", 140.0),
        ])
    }
}
