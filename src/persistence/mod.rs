//! Flat-file persistence for employee records.
//!
//! This module reads and writes the comma separated row format: a type tag
//! followed by an employee's full record. Loading isolates failures per row
//! so one bad line never prevents the rest of a file from loading.

mod loader;
mod row;
mod saver;

pub use loader::{LoadOutcome, Loader, RowFailure};
pub use row::{ROW_FIELDS, format_row, parse_row};
pub use saver::{save, save_file};
