//! Pay bases and weekly pay calculation.
//!
//! Salaried employees carry a validated [`Salary`], hourly employees a
//! validated [`Wage`]. Both implement [`Pay`], which every employee kind
//! forwards to.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

use super::validation::{validate_hourly, validate_yearly};

/// Weeks used to turn a yearly salary into weekly pay.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Hours in a standard paid week.
pub const HOURS_PER_WEEK: f64 = 40.0;

/// Weekly pay calculation.
pub trait Pay {
    /// Computes the weekly pay used in the pay report.
    fn calc_pay(&self) -> f64;
}

/// A yearly salary of at least $50,000.
///
/// # Example
///
/// ```
/// use acme_roster::models::{Pay, Salary};
/// use rust_decimal::Decimal;
///
/// let salary = Salary::new(Decimal::from(60_000)).unwrap();
/// assert_eq!(salary.calc_pay(), 60000.0 / 52.0);
/// assert!(Salary::new(Decimal::from(30_000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Salary(Decimal);

impl Salary {
    /// Validates and wraps a yearly amount.
    pub fn new(yearly: Decimal) -> RosterResult<Self> {
        validate_yearly(yearly).map(Self)
    }

    /// Returns the yearly amount exactly as supplied.
    pub fn yearly(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Salary {
    type Error = RosterError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Salary> for Decimal {
    fn from(value: Salary) -> Self {
        value.0
    }
}

impl Pay for Salary {
    fn calc_pay(&self) -> f64 {
        let yearly = self
            .0
            .to_f64()
            .expect("a validated salary is a finite Decimal, which always converts to f64");
        yearly / WEEKS_PER_YEAR
    }
}

/// An hourly wage between $15 and $99.99 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Wage(Decimal);

impl Wage {
    /// Validates and wraps an hourly rate.
    pub fn new(hourly: Decimal) -> RosterResult<Self> {
        validate_hourly(hourly).map(Self)
    }

    /// Returns the hourly rate exactly as supplied.
    pub fn hourly(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Wage {
    type Error = RosterError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Wage> for Decimal {
    fn from(value: Wage) -> Self {
        value.0
    }
}

impl Pay for Wage {
    fn calc_pay(&self) -> f64 {
        let hourly = self
            .0
            .to_f64()
            .expect("a validated wage lies between 15 and 99.99, which always converts to f64");
        hourly * HOURS_PER_WEEK
    }
}

/// The pay figure a presenter shows next to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "basis", content = "amount")]
pub enum PayBasis {
    /// Yearly salary of an executive or manager.
    Yearly(Decimal),
    /// Hourly wage of a permanent or temporary employee.
    Hourly(Decimal),
}

impl PayBasis {
    /// Returns the amount regardless of basis.
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Yearly(amount) | Self::Hourly(amount) => *amount,
        }
    }
}
