//! Closed enumerations that classify employees.
//!
//! [`Role`] and [`Department`] are chosen by name from the data file or a
//! form, so both parse from their exact upper-case names and nothing else.
//! [`EmployeeType`] is the type tag that leads every persisted row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// The role held by an executive.
///
/// # Example
///
/// ```
/// use acme_roster::models::Role;
///
/// let role: Role = "CFO".parse().unwrap();
/// assert_eq!(role, Role::Cfo);
/// assert_eq!(role.as_str(), "CFO");
/// assert!("cfo".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Chief executive officer.
    Ceo,
    /// Chief financial officer.
    Cfo,
    /// Chief information officer.
    Cio,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Ceo, Role::Cfo, Role::Cio];

    /// Returns the persisted name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Cfo => "CFO",
            Self::Cio => "CIO",
        }
    }
}

impl FromStr for Role {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RosterError::InvalidRole {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The department a manager heads.
///
/// # Example
///
/// ```
/// use acme_roster::models::Department;
///
/// let department: Department = "R_AND_D".parse().unwrap();
/// assert_eq!(department, Department::RAndD);
/// assert_eq!(department.to_string(), "R_AND_D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    /// Accounting.
    Accounting,
    /// Finance.
    Finance,
    /// Human resources.
    Hr,
    /// Research and development.
    RAndD,
    /// The machine shop floor.
    Machining,
}

impl Department {
    /// Every department, in declaration order.
    pub const ALL: [Department; 5] = [
        Department::Accounting,
        Department::Finance,
        Department::Hr,
        Department::RAndD,
        Department::Machining,
    ];

    /// Returns the persisted name of the department.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accounting => "ACCOUNTING",
            Self::Finance => "FINANCE",
            Self::Hr => "HR",
            Self::RAndD => "R_AND_D",
            Self::Machining => "MACHINING",
        }
    }
}

impl FromStr for Department {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|department| department.as_str() == s)
            .ok_or_else(|| RosterError::InvalidDepartment {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete kind of an employee, used as the leading column of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeType {
    /// A salaried executive.
    Executive,
    /// A salaried department manager.
    Manager,
    /// A permanent hourly employee.
    Permanent,
    /// A temporary hourly employee.
    Temp,
}

impl EmployeeType {
    /// Every type tag, in declaration order.
    pub const ALL: [EmployeeType; 4] = [
        EmployeeType::Executive,
        EmployeeType::Manager,
        EmployeeType::Permanent,
        EmployeeType::Temp,
    ];

    /// Returns the tag as written to the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Executive => "Executive",
            Self::Manager => "Manager",
            Self::Permanent => "Permanent",
            Self::Temp => "Temp",
        }
    }

    /// Returns true for the yearly-salary family.
    pub fn is_salaried(&self) -> bool {
        matches!(self, Self::Executive | Self::Manager)
    }
}

impl FromStr for EmployeeType {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| RosterError::UnknownTypeTag { tag: s.to_string() })
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
