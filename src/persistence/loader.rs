//! Reading employees from the row format.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, IdAllocator};

use super::row::parse_row;

/// A row that could not be turned into an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    /// The 1-based line number of the row.
    pub line: usize,
    /// Why the row was rejected.
    pub error: RosterError,
}

/// The result of loading a data file.
///
/// Rows are independent: a bad row is recorded in `failures` and loading
/// carries on with the next one.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Employees built from valid rows, in file order.
    pub employees: Vec<Employee>,
    /// Rows that were rejected, in file order.
    pub failures: Vec<RowFailure>,
}

impl LoadOutcome {
    /// Returns true when every row was loaded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads employees row by row, handing out ids from an allocator.
pub struct Loader<'a> {
    ids: &'a IdAllocator,
}

impl<'a> Loader<'a> {
    /// Creates a loader drawing ids from `ids`.
    pub fn new(ids: &'a IdAllocator) -> Self {
        Self { ids }
    }

    /// Reads every row from `reader`.
    ///
    /// Blank lines are skipped. Only a failure to read the input itself is
    /// returned as an error; bad rows end up in [`LoadOutcome::failures`].
    ///
    /// # Example
    ///
    /// ```
    /// use acme_roster::models::IdAllocator;
    /// use acme_roster::persistence::Loader;
    ///
    /// let data = "\
    /// Executive,Elon, x@acme-machining.com, ./images/placeholder.png, 60000, CEO
    /// Intern,Kim, k@acme-machining.com, ./images/placeholder.png, 15, 01/01/24
    /// Temp,Peter, p@acme-machining.com, ./images/placeholder.png, 16.00, 02/19/23
    /// ";
    /// let ids = IdAllocator::new();
    /// let outcome = Loader::new(&ids).load(data.as_bytes()).unwrap();
    /// assert_eq!(outcome.employees.len(), 2);
    /// assert_eq!(outcome.failures[0].line, 2);
    /// ```
    pub fn load<R: BufRead>(&self, reader: R) -> RosterResult<LoadOutcome> {
        self.load_named("<input>", reader)
    }

    /// Reads every row from the file at `path`.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> RosterResult<LoadOutcome> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let file = File::open(path).map_err(|e| RosterError::Io {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        self.load_named(&path_str, BufReader::new(file))
    }

    fn load_named<R: BufRead>(&self, source: &str, reader: R) -> RosterResult<LoadOutcome> {
        let mut outcome = LoadOutcome::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| RosterError::Io {
                path: source.to_string(),
                message: e.to_string(),
            })?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_row(&line, self.ids) {
                Ok(employee) => outcome.employees.push(employee),
                Err(error) => {
                    warn!(
                        source,
                        line = line_number,
                        error = %error,
                        "Skipping invalid employee row"
                    );
                    outcome.failures.push(RowFailure {
                        line: line_number,
                        error,
                    });
                }
            }
        }

        info!(
            source,
            loaded = outcome.employees.len(),
            rejected = outcome.failures.len(),
            "Loaded employee rows"
        );
        Ok(outcome)
    }
}
