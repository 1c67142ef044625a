//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from provider/IO errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Vehicle model not present in the catalog
    #[error("unknown vehicle model: {0}")]
    UnknownVehicle(String),

    /// Battery percentage outside 0..=100
    #[error("battery level must be between 0 and 100, got {0}")]
    InvalidBattery(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::UnknownVehicle("Model T".into());
        assert_eq!(err.to_string(), "unknown vehicle model: Model T");

        let err = DomainError::InvalidBattery(150);
        assert_eq!(
            err.to_string(),
            "battery level must be between 0 and 100, got 150"
        );
    }
}
