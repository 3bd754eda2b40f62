//! Parking Engine for multi-floor parking facilities
//!
//! This crate tracks slot occupancy across the floors of a parking facility,
//! recommends free slots, and calculates time-based parking fees with a
//! discount for registered vehicles.

#![warn(missing_docs)]

pub mod billing;
pub mod config;
pub mod error;
pub mod grid;
pub mod models;
pub mod session;
