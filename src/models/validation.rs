//! Field validators shared by every employee kind.
//!
//! Each validator returns the accepted value or the first rule it broke.
//! Constructors and setters call these before touching a record, so a
//! rejected value never lands in a field.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{RosterError, RosterResult};

/// Every email address must contain this domain.
pub const EMAIL_DOMAIN: &str = "@acme-machining.com";

/// Image path given to employees without a photo.
pub const IMAGE_PLACEHOLDER: &str = "./images/placeholder.png";

/// Lowest accepted yearly salary.
pub const MIN_YEARLY_SALARY: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Lowest accepted hourly wage.
pub const MIN_HOURLY_WAGE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Highest accepted hourly wage.
pub const MAX_HOURLY_WAGE: Decimal = Decimal::from_parts(9_999, 0, 0, false, 2);

/// The external date format for hire dates and last days (`MM/DD/YY`).
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Validates an employee name. Blank or whitespace-only names are rejected.
pub fn validate_name(value: &str) -> RosterResult<String> {
    if value.trim().is_empty() {
        return Err(RosterError::invalid_field("name", "Name cannot be blank."));
    }
    Ok(value.to_string())
}

/// Validates an email address.
///
/// # Example
///
/// ```
/// use acme_roster::models::validation::validate_email;
///
/// assert!(validate_email("ray@acme-machining.com").is_ok());
/// assert!(validate_email("ray@gmail.com").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(value: &str) -> RosterResult<String> {
    if value.trim().is_empty() {
        return Err(RosterError::invalid_field("email", "Email cannot be blank."));
    }
    if !value.contains(EMAIL_DOMAIN) {
        return Err(RosterError::invalid_field(
            "email",
            format!("Email must contain \"{}\"", EMAIL_DOMAIN),
        ));
    }
    Ok(value.to_string())
}

/// Validates an image path.
pub fn validate_image(value: &str) -> RosterResult<String> {
    if value.trim().is_empty() {
        return Err(RosterError::invalid_field(
            "image",
            "Image path cannot be blank",
        ));
    }
    Ok(value.to_string())
}

/// Validates a yearly salary.
///
/// Negative values and values under the minimum fail with different messages.
pub fn validate_yearly(value: Decimal) -> RosterResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(RosterError::invalid_field(
            "yearly",
            "Yearly Salary cannot be less than 0.",
        ));
    }
    if value < MIN_YEARLY_SALARY {
        return Err(RosterError::invalid_field(
            "yearly",
            "Yearly Salary must be at least $50,000.",
        ));
    }
    Ok(value)
}

/// Validates an hourly wage against the closed range `[15, 99.99]`.
pub fn validate_hourly(value: Decimal) -> RosterResult<Decimal> {
    if value < MIN_HOURLY_WAGE {
        return Err(RosterError::invalid_field("hourly", "Wage is too low."));
    }
    if value > MAX_HOURLY_WAGE {
        return Err(RosterError::invalid_field("hourly", "Wage is too high."));
    }
    Ok(value)
}

/// Parses the text form of a pay field (`yearly` or `hourly`).
///
/// Only reports whether the text is a number; range checks are left to
/// [`validate_yearly`] and [`validate_hourly`].
pub fn parse_amount(field: &'static str, value: &str) -> RosterResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| {
        let label = if field == "yearly" {
            "Yearly Salary"
        } else {
            "Hourly wage"
        };
        RosterError::invalid_field(field, format!("{} must be a number", label))
    })
}

/// Parses a `MM/DD/YY` date for the named field.
///
/// # Example
///
/// ```
/// use acme_roster::models::validation::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("last_day", "02/19/23").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2023, 2, 19).unwrap());
/// assert!(parse_date("last_day", "2023-02-19").is_err());
/// ```
pub fn parse_date(field: &'static str, value: &str) -> RosterResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| RosterError::InvalidDate {
        field,
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Renders a date in the external `MM/DD/YY` format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn message_of(result: RosterResult<Decimal>) -> String {
        match result {
            Err(RosterError::InvalidField { message, .. }) => message,
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_name_rejects_blank_values() {
        for value in ["", " ", "   ", "\t"] {
            match validate_name(value) {
                Err(RosterError::InvalidField { field, .. }) => assert_eq!(field, "name"),
                other => panic!("Expected InvalidField for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_name_keeps_value_unchanged() {
        assert_eq!(validate_name("Steve Carell").unwrap(), "Steve Carell");
    }

    #[test]
    fn test_email_requires_company_domain() {
        assert!(validate_email("John@acme-machining.com").is_ok());
        for value in ["@gmail.com", "john@acme.com", "acme-machining.com", " ", ""] {
            match validate_email(value) {
                Err(RosterError::InvalidField { field, .. }) => assert_eq!(field, "email"),
                other => panic!("Expected InvalidField for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_email_blank_and_wrong_domain_have_distinct_messages() {
        let blank = validate_email("").unwrap_err().to_string();
        let domain = validate_email("x@gmail.com").unwrap_err().to_string();
        assert_ne!(blank, domain);
        assert!(domain.contains(EMAIL_DOMAIN));
    }

    #[test]
    fn test_image_rejects_blank() {
        assert!(validate_image("main/assets/face.jpg").is_ok());
        assert!(validate_image("").is_err());
        assert!(validate_image(" ").is_err());
    }

    #[test]
    fn test_yearly_negative_and_low_have_distinct_messages() {
        let negative = message_of(validate_yearly(dec("-1")));
        let low = message_of(validate_yearly(dec("20000")));
        let zero = message_of(validate_yearly(Decimal::ZERO));
        assert_eq!(negative, "Yearly Salary cannot be less than 0.");
        assert_eq!(low, "Yearly Salary must be at least $50,000.");
        assert_eq!(zero, low);
    }

    #[test]
    fn test_yearly_accepts_minimum_and_above() {
        assert_eq!(validate_yearly(dec("50000")).unwrap(), dec("50000"));
        assert!(validate_yearly(dec("49999.99")).is_err());
        assert!(validate_yearly(dec("250000")).is_ok());
    }

    #[test]
    fn test_hourly_bounds_are_inclusive() {
        assert!(validate_hourly(dec("15")).is_ok());
        assert!(validate_hourly(dec("99.99")).is_ok());
        assert_eq!(message_of(validate_hourly(dec("14.99"))), "Wage is too low.");
        assert_eq!(message_of(validate_hourly(dec("100"))), "Wage is too high.");
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        assert_eq!(parse_amount("yearly", " 60000 ").unwrap(), dec("60000"));
        assert_eq!(
            message_of(parse_amount("yearly", "sixty")),
            "Yearly Salary must be a number"
        );
        assert_eq!(
            message_of(parse_amount("hourly", "")),
            "Hourly wage must be a number"
        );
    }

    #[test]
    fn test_parse_amount_keeps_scale() {
        assert_eq!(parse_amount("hourly", "16.00").unwrap().to_string(), "16.00");
    }

    #[test]
    fn test_parse_date_accepts_fixed_format() {
        assert_eq!(
            parse_date("hire_date", "09/27/82").unwrap(),
            NaiveDate::from_ymd_opt(1982, 9, 27).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        for value in ["2023-02-19", "13/01/23", "02/30/23", "", "2023-02-19 00:00:00"] {
            match parse_date("last_day", value) {
                Err(RosterError::InvalidDate { field, value: v, .. }) => {
                    assert_eq!(field, "last_day");
                    assert_eq!(v, value);
                }
                other => panic!("Expected InvalidDate for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_format_date_matches_parse_format() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 19).unwrap();
        assert_eq!(format_date(date), "02/19/23");
        assert_eq!(parse_date("last_day", &format_date(date)).unwrap(), date);
    }
}
