//! Configuration loading for the Parking Engine.
//!
//! This module loads a facility configuration from YAML: grid dimensions,
//! the hourly rate, and the plates registered for the discount.
//!
//! # Example
//!
//! ```no_run
//! use parking_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/facility.yaml").unwrap();
//! println!("Hourly rate: {}", config.config().hourly_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_HOURLY_RATE, DEFAULT_REGISTERED_PLATES, FacilityConfig};
