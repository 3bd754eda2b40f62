//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a facility
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::FacilityConfig;

/// Loads and validates facility configuration.
///
/// # File Format
///
/// ```text
/// floors: 3
/// slots_per_floor: 10
/// hourly_rate: 10000
/// registered_plates: ["1111", "1421", "5151"]
/// ```
///
/// # Example
///
/// ```no_run
/// use parking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/facility.yaml")?;
/// println!("Floors: {}", loader.config().floors);
/// # Ok::<(), parking_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FacilityConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown fields (`ConfigParseError`)
    /// - A value is unusable (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses and validates configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config: FacilityConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> FacilityConfig {
        self.config
    }
}
