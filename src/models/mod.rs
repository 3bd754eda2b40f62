//! Core data models for the Parking Engine.
//!
//! This module contains the value types shared by the occupancy grid and
//! the billing calculator.

mod receipt;
mod slot;
mod timestamp;
mod vehicle;

pub use receipt::{AuditStep, DepartureReceipt};
pub use slot::{Slot, SlotRef, SlotState};
pub use timestamp::{MAX_HOUR, MAX_MINUTE, Timestamp};
pub use vehicle::VehicleRecord;
