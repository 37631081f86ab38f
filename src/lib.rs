//! Employee roster for the Acme Machining HR system
//!
//! This crate provides validated employee records (executives, managers,
//! permanent and temporary staff), their weekly pay calculation, and the
//! flat comma separated file format the roster is loaded from and saved to.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod roster;

pub use roster::{Roster, RosterRow};
