//! Command and outcome types for session dispatch.
//!
//! Commands are tagged by `action` so a caller can build them from its own
//! input format.

use serde::{Deserialize, Serialize};

use crate::models::{DepartureReceipt, SlotRef, Timestamp};

/// Where a parking vehicle should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Placement {
    /// The first free slot, as returned by `Grid::recommend`.
    Recommended,
    /// A slot chosen by the driver.
    Slot {
        /// Floor number.
        floor: usize,
        /// Slot index within the floor.
        index: usize,
    },
}

/// A request against a parking session.
///
/// # Example
///
/// ```
/// use parking_engine::session::{Command, Placement};
///
/// let json = r#"{"action": "park", "plate": "1234", "time": "0930",
///                "placement": {"kind": "recommended"}}"#;
/// let command: Command = serde_json::from_str(json).unwrap();
/// assert!(matches!(command, Command::Park { placement: Placement::Recommended, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum Command {
    /// Park a vehicle.
    Park {
        /// The vehicle's plate.
        plate: String,
        /// Arrival time.
        time: Timestamp,
        /// Which slot to use.
        placement: Placement,
    },
    /// Bill and release a parked vehicle.
    Depart {
        /// The vehicle's plate.
        plate: String,
        /// Departure time.
        time: Timestamp,
    },
}

/// The result of a successfully executed [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Outcome {
    /// The vehicle was parked.
    Parked {
        /// Where it was parked.
        slot: SlotRef,
        /// Whether the slot came from the recommendation.
        recommended: bool,
    },
    /// The vehicle left and was billed.
    Departed(DepartureReceipt),
}
