//! Command dispatch for the Parking Engine.
//!
//! A caller turns its own input into a [`Command`] and hands it to a
//! [`ParkingSession`], which runs it against the grid and the billing
//! calculator. The grid and billing modules know nothing about commands.

mod command;
mod parking_session;

pub use command::{Command, Outcome, Placement};
pub use parking_session::ParkingSession;
