//! Occupancy grid for the Parking Engine.
//!
//! The grid owns every slot of the facility and is the only mutable state in
//! the engine. It answers which slot to use next, parks and releases vehicles,
//! and finds where a vehicle is parked.

mod occupancy;

pub use occupancy::{DEFAULT_FLOORS, DEFAULT_SLOTS_PER_FLOOR, Grid};
