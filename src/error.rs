//! Error types for the employee roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the domain model, the row codec and the configuration
//! loader can report.

use thiserror::Error;

/// The main error type for the employee roster.
///
/// Field validation, persistence and configuration all report through this
/// type, so a loader can surface exactly which rule a row broke.
///
/// # Example
///
/// ```
/// use acme_roster::error::RosterError;
///
/// let error = RosterError::InvalidRole {
///     value: "CTO".to_string(),
/// };
/// assert_eq!(error.to_string(), "CTO not in Roles");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// A field failed its validator.
    #[error("Invalid {field}: {message}")]
    InvalidField {
        /// The name of the field that was rejected.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// The value does not name a member of the `Role` enumeration.
    #[error("{value} not in Roles")]
    InvalidRole {
        /// The rejected value.
        value: String,
    },

    /// The value does not name a member of the `Department` enumeration.
    #[error("{value} not in Departments")]
    InvalidDepartment {
        /// The rejected value.
        value: String,
    },

    /// A date field did not match the `MM/DD/YY` format.
    #[error("Invalid {field} '{value}': {message}")]
    InvalidDate {
        /// The date field being set.
        field: &'static str,
        /// The rejected text.
        value: String,
        /// The parser's description of the problem.
        message: String,
    },

    /// A pay field was set on an employee of the other pay basis.
    #[error("{employee_type} employees have no {field} field")]
    PayBasisMismatch {
        /// The pay field that was addressed.
        field: &'static str,
        /// The type tag of the employee.
        employee_type: String,
    },

    /// A persisted row has the wrong shape.
    #[error("Malformed row: {message}")]
    MalformedRow {
        /// A description of the problem.
        message: String,
    },

    /// A persisted row starts with an unknown type tag.
    #[error("Unknown employee type tag: {tag}")]
    UnknownTypeTag {
        /// The tag that was read.
        tag: String,
    },

    /// A field cannot be written to the comma separated row format: it
    /// holds a delimiter or line break, or starts or ends with whitespace.
    #[error("Field '{field}' cannot be saved in the row format")]
    UnencodableField {
        /// The offending field.
        field: &'static str,
    },

    /// An employee with this id is already in the roster.
    #[error("Employee {id_number} is already in the roster")]
    DuplicateId {
        /// The id that is already taken.
        id_number: u64,
    },

    /// Reading or writing a data file failed.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying error message.
        message: String,
    },

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
}

impl RosterError {
    /// Builds an [`RosterError::InvalidField`] for `field`.
    pub(crate) fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Returns true for errors raised by field validation, as opposed to
    /// row-format, I/O or configuration problems.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidField { .. }
                | Self::InvalidRole { .. }
                | Self::InvalidDepartment { .. }
                | Self::InvalidDate { .. }
                | Self::PayBasisMismatch { .. }
        )
    }
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
