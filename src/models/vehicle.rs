//! Vehicle record held by an occupied slot.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A parked vehicle and the time it entered.
///
/// The record is created when a vehicle is assigned to a slot and is owned
/// by that slot until release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// The licence plate identifier.
    pub plate: String,
    /// When the vehicle entered the facility.
    pub entry_time: Timestamp,
}

impl VehicleRecord {
    /// Creates a new vehicle record.
    pub fn new(plate: impl Into<String>, entry_time: Timestamp) -> Self {
        Self {
            plate: plate.into(),
            entry_time,
        }
    }
}
