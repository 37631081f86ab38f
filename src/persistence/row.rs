//! The flat row format.
//!
//! One employee per line: the type tag, then the full record, all comma
//! separated. Whitespace around each field is ignored on read, so values
//! that start or end with whitespace are refused on write.
//!
//! ```text
//! Executive,Elon, x@acme-machining.com, ./images/placeholder.png, 60000, CEO
//! Temp,Peter, John@acme-machining.com, ./images/placeholder.png, 16.00, 02/19/23
//! ```
//!
//! Ids are not stored; they are handed out again as rows are read.

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, EmployeeType, IdAllocator};

/// Number of comma separated fields in a row, including the type tag.
pub const ROW_FIELDS: usize = 6;

const DELIMITER: char = ',';

/// Builds an employee from one row.
///
/// # Returns
///
/// Returns the employee, or an error if:
/// - The row does not have exactly six fields (`MalformedRow`)
/// - The first field is not a known type tag (`UnknownTypeTag`)
/// - Any field fails validation (the validator's own error)
///
/// # Example
///
/// ```
/// use acme_roster::models::IdAllocator;
/// use acme_roster::persistence::parse_row;
///
/// let ids = IdAllocator::new();
/// let employee = parse_row(
///     "Manager,Steve Carell, sc@acme-machining.com, ./images/placeholder.png, 70000, FINANCE",
///     &ids,
/// )
/// .unwrap();
/// assert_eq!(employee.to_string(), "1:Steve Carell");
/// ```
pub fn parse_row(line: &str, ids: &IdAllocator) -> RosterResult<Employee> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() != ROW_FIELDS {
        return Err(RosterError::MalformedRow {
            message: format!(
                "expected {} fields, found {}",
                ROW_FIELDS,
                fields.len()
            ),
        });
    }

    let employee_type: EmployeeType = fields[0].parse()?;
    Employee::from_fields(
        ids,
        employee_type,
        fields[1],
        fields[2],
        fields[3],
        fields[4],
        fields[5],
    )
}

/// Renders one employee as a row.
///
/// Fails with `UnencodableField` when a free-text field contains a comma or
/// a line break, or starts or ends with whitespace, since [`parse_row`]
/// would not read the same value back.
pub fn format_row(employee: &Employee) -> RosterResult<String> {
    let free_text = [
        ("name", employee.name()),
        ("email", employee.email()),
        ("image", employee.image()),
    ];
    if let Some(&(field, _)) = free_text.iter().find(|(_, value)| !is_encodable(value)) {
        return Err(RosterError::UnencodableField { field });
    }

    Ok(format!(
        "{}{}{}",
        employee.employee_type(),
        DELIMITER,
        employee.to_record()
    ))
}

fn is_encodable(value: &str) -> bool {
    !value.contains([DELIMITER, '\n', '\r']) && value.trim() == value
}
