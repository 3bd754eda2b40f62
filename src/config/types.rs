//! Configuration types for a parking facility.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::billing::Registry;
use crate::error::{EngineError, EngineResult};
use crate::grid::{DEFAULT_FLOORS, DEFAULT_SLOTS_PER_FLOOR};

/// Default charge per billed hour.
pub const DEFAULT_HOURLY_RATE: i64 = 10000;

/// Plates registered for the discount in a default facility.
pub const DEFAULT_REGISTERED_PLATES: [&str; 3] = ["1111", "1421", "5151"];

/// Facility configuration.
///
/// Every field is optional in the file and falls back to the default
/// facility: 3 floors of 10 slots, 10000 per hour, and the three default
/// registered plates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacilityConfig {
    /// Number of floors.
    pub floors: usize,
    /// Number of slots on every floor.
    pub slots_per_floor: usize,
    /// Charge per billed hour.
    pub hourly_rate: Decimal,
    /// Plates entitled to the 50% discount.
    pub registered_plates: Registry,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS,
            slots_per_floor: DEFAULT_SLOTS_PER_FLOOR,
            hourly_rate: Decimal::from(DEFAULT_HOURLY_RATE),
            registered_plates: Registry::from_iter(DEFAULT_REGISTERED_PLATES),
        }
    }
}

impl FacilityConfig {
    /// Checks that the configuration describes a usable facility.
    ///
    /// Returns `InvalidConfig` if either dimension is zero or the hourly
    /// rate is not positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.floors == 0 {
            return Err(EngineError::InvalidConfig {
                field: "floors".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.slots_per_floor == 0 {
            return Err(EngineError::InvalidConfig {
                field: "slots_per_floor".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.hourly_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "hourly_rate".to_string(),
                message: format!("must be positive, got {}", self.hourly_rate),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_facility() {
        let config = FacilityConfig::default();

        assert_eq!(config.floors, 3);
        assert_eq!(config.slots_per_floor, 10);
        assert_eq!(config.hourly_rate, Decimal::from(10000));
        assert_eq!(config.registered_plates.len(), 3);
        assert!(config.registered_plates.contains("1421"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_floors_is_invalid() {
        let config = FacilityConfig {
            floors: 0,
            ..FacilityConfig::default()
        };

        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "floors"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_slots_is_invalid() {
        let config = FacilityConfig {
            slots_per_floor: 0,
            ..FacilityConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { field, .. }) if field == "slots_per_floor"
        ));
    }

    #[test]
    fn test_non_positive_rate_is_invalid() {
        let config = FacilityConfig {
            hourly_rate: Decimal::ZERO,
            ..FacilityConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { field, .. }) if field == "hourly_rate"
        ));
    }
}
