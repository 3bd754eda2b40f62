//! Error types for the Parking Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parking, departing and billing.

use thiserror::Error;

use crate::models::Timestamp;

/// The main error type for the Parking Engine.
///
/// All operations in the engine return this error type. None of them are
/// fatal: the caller decides whether to retry with corrected input or
/// abandon the current transaction.
///
/// # Example
///
/// ```
/// use parking_engine::error::EngineError;
///
/// let error = EngineError::NotFound {
///     plate: "1234".to_string(),
/// };
/// assert_eq!(error.to_string(), "Vehicle '1234' is not parked here");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Floor or slot index lies outside the grid.
    #[error("Slot (floor {floor}, index {index}) is outside the {depth}x{width} grid")]
    OutOfRange {
        /// The requested floor.
        floor: usize,
        /// The requested slot index.
        index: usize,
        /// Number of floors in the grid.
        depth: usize,
        /// Number of slots per floor.
        width: usize,
    },

    /// The target slot already holds a vehicle.
    #[error("Slot (floor {floor}, index {index}) is already occupied")]
    AlreadyOccupied {
        /// The requested floor.
        floor: usize,
        /// The requested slot index.
        index: usize,
    },

    /// The vehicle is already parked somewhere in the grid.
    #[error("Vehicle '{plate}' is already parked at floor {floor}, index {index}")]
    AlreadyParked {
        /// The plate being assigned.
        plate: String,
        /// Floor of the existing assignment.
        floor: usize,
        /// Slot index of the existing assignment.
        index: usize,
    },

    /// Every slot in the grid is occupied.
    #[error("There is no free slot to park")]
    Full,

    /// No slot holds the given plate.
    #[error("Vehicle '{plate}' is not parked here")]
    NotFound {
        /// The plate that was searched for.
        plate: String,
    },

    /// Departure time is earlier than arrival time.
    #[error("Exit time {exit} is earlier than entry time {entry}")]
    InvalidInterval {
        /// The recorded entry time.
        entry: Timestamp,
        /// The requested exit time.
        exit: Timestamp,
    },

    /// A time string was not a valid `HHMM` encoding.
    #[error("Invalid time string '{input}': {message}")]
    InvalidTimeFormat {
        /// The raw input.
        input: String,
        /// What was wrong with it.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
