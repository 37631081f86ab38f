//! Configuration types for the roster.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the roster YAML file.

use serde::Deserialize;

use crate::models::FIRST_ID;

/// Settings for loading and saving a roster.
///
/// Every field has a default, so an empty YAML document yields
/// `RosterConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// The data file employees are loaded from.
    pub data_file: String,
    /// The data file employees are saved to.
    pub save_file: String,
    /// The id given to the first employee created.
    pub first_id: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: "./employee.data".to_string(),
            save_file: "./employeesave.data".to_string(),
            first_id: FIRST_ID,
        }
    }
}
