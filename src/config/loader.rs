//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading roster
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RosterError, RosterResult};

use super::types::RosterConfig;

/// Loads and provides access to roster configuration.
///
/// # File Format
///
/// ```text
/// data_file: ./employee.data
/// save_file: ./employeesave.data
/// first_id: 1
/// ```
///
/// Any key may be omitted to keep its default.
///
/// # Example
///
/// ```no_run
/// use acme_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./roster.yaml")?;
/// println!("Loading employees from {}", loader.config().data_file);
/// # Ok::<(), acme_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&path_str, &content)?;
        debug!(path = %path_str, "Loaded roster configuration");
        Ok(Self { config })
    }

    /// Parses configuration text. `origin` names the source in errors.
    pub fn parse(origin: &str, content: &str) -> RosterResult<RosterConfig> {
        if content.trim().is_empty() {
            return Ok(RosterConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| RosterError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RosterConfig {
        self.config
    }
}
