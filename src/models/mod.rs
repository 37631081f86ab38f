//! Core data models for the employee roster.
//!
//! This module contains the employee record types, their classifications,
//! pay bases and the validators every field goes through.

mod classification;
mod employee;
mod id;
mod pay;
pub mod validation;

pub use classification::{Department, EmployeeType, Role};
pub use employee::{Employee, EmployeeBase, EmployeeKind, Executive, Manager, Permanent, Temp};
pub use id::{FIRST_ID, IdAllocator};
pub use pay::{HOURS_PER_WEEK, Pay, PayBasis, Salary, WEEKS_PER_YEAR, Wage};
