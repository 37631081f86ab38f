//! Configuration loading for the employee roster.
//!
//! This module loads roster settings (data file locations and the first id
//! to hand out) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use acme_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./roster.yaml").unwrap().into_config();
//! println!("Saving employees to {}", config.save_file);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::RosterConfig;
