//! Slot model and related types.
//!
//! This module defines the [`Slot`] struct, its [`SlotState`], and the
//! [`SlotRef`] coordinate pair used to address a slot within a grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::VehicleRecord;

/// Coordinates of a slot: floor number and index within the floor.
///
/// # Example
///
/// ```
/// use parking_engine::models::SlotRef;
///
/// let slot = SlotRef::new(1, 4);
/// assert_eq!(slot.to_string(), "floor 1 slot 4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotRef {
    /// Floor number, starting at zero.
    pub floor: usize,
    /// Slot index within the floor, starting at zero.
    pub index: usize,
}

impl SlotRef {
    /// Creates a new slot reference.
    pub fn new(floor: usize, index: usize) -> Self {
        Self { floor, index }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {} slot {}", self.floor, self.index)
    }
}

/// Occupancy state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// No vehicle is parked in the slot.
    Free,
    /// A vehicle is parked in the slot.
    Occupied,
}

/// A single parking space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    occupant: Option<VehicleRecord>,
}

impl Slot {
    /// Returns the parked vehicle, if any.
    pub fn occupant(&self) -> Option<&VehicleRecord> {
        self.occupant.as_ref()
    }

    /// Returns true if no vehicle is parked here.
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// Returns the occupancy state.
    pub fn state(&self) -> SlotState {
        if self.is_free() {
            SlotState::Free
        } else {
            SlotState::Occupied
        }
    }

    /// Returns true if the given plate is parked here.
    pub fn holds(&self, plate: &str) -> bool {
        self.occupant.as_ref().is_some_and(|v| v.plate == plate)
    }

    pub(crate) fn occupy(&mut self, record: VehicleRecord) {
        self.occupant = Some(record);
    }

    pub(crate) fn vacate(&mut self) -> Option<VehicleRecord> {
        self.occupant.take()
    }
}
