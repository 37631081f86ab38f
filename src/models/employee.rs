//! Employee records and their kinds.
//!
//! An [`Employee`] is a set of shared base fields plus exactly one
//! [`EmployeeKind`]: two salaried kinds (executives and managers) and two
//! hourly kinds (permanent and temporary staff). There is no generic
//! employee; every record is built through one of the four constructors.
//!
//! Every field is validated when the record is built and again by every
//! setter. A failed setter leaves the record untouched. Records are plain
//! owned values: whoever holds the `&mut Employee` is the only writer.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::{RosterError, RosterResult};

use super::classification::{Department, EmployeeType, Role};
use super::id::IdAllocator;
use super::pay::{Pay, PayBasis, Salary, Wage};
use super::validation::{
    IMAGE_PLACEHOLDER, format_date, parse_amount, parse_date, validate_email, validate_image,
    validate_name,
};

/// Fields every employee carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeBase {
    id_number: u64,
    name: String,
    email: String,
    image: String,
}

/// A salaried employee holding one of the executive roles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Executive {
    yearly: Salary,
    role: Role,
}

impl Executive {
    /// Validates the salary, then the role name.
    pub fn new(yearly: Decimal, role: &str) -> RosterResult<Self> {
        Ok(Self {
            yearly: Salary::new(yearly)?,
            role: role.parse()?,
        })
    }

    /// Returns the yearly salary.
    pub fn yearly(&self) -> Decimal {
        self.yearly.yearly()
    }

    /// Replaces the yearly salary.
    pub fn set_yearly(&mut self, yearly: Decimal) -> RosterResult<()> {
        self.yearly = Salary::new(yearly)?;
        Ok(())
    }

    /// Returns the executive's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Replaces the role. The value must be a `Role` name such as `"CFO"`.
    pub fn set_role(&mut self, role: &str) -> RosterResult<()> {
        self.role = role.parse()?;
        Ok(())
    }
}

impl Pay for Executive {
    fn calc_pay(&self) -> f64 {
        self.yearly.calc_pay()
    }
}

/// A salaried employee heading a department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manager {
    yearly: Salary,
    department: Department,
}

impl Manager {
    /// Validates the salary, then the department name.
    pub fn new(yearly: Decimal, department: &str) -> RosterResult<Self> {
        Ok(Self {
            yearly: Salary::new(yearly)?,
            department: department.parse()?,
        })
    }

    /// Returns the yearly salary.
    pub fn yearly(&self) -> Decimal {
        self.yearly.yearly()
    }

    /// Replaces the yearly salary.
    pub fn set_yearly(&mut self, yearly: Decimal) -> RosterResult<()> {
        self.yearly = Salary::new(yearly)?;
        Ok(())
    }

    /// Returns the managed department.
    pub fn department(&self) -> Department {
        self.department
    }

    /// Replaces the department. The value must be a `Department` name.
    pub fn set_department(&mut self, department: &str) -> RosterResult<()> {
        self.department = department.parse()?;
        Ok(())
    }
}

impl Pay for Manager {
    fn calc_pay(&self) -> f64 {
        self.yearly.calc_pay()
    }
}

/// An hourly employee with a hire date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Permanent {
    hourly: Wage,
    hire_date: NaiveDate,
}

impl Permanent {
    /// Validates the wage, then parses the `MM/DD/YY` hire date.
    pub fn new(hourly: Decimal, hire_date: &str) -> RosterResult<Self> {
        Ok(Self {
            hourly: Wage::new(hourly)?,
            hire_date: parse_date("hire_date", hire_date)?,
        })
    }

    /// Returns the hourly wage.
    pub fn hourly(&self) -> Decimal {
        self.hourly.hourly()
    }

    /// Replaces the hourly wage.
    pub fn set_hourly(&mut self, hourly: Decimal) -> RosterResult<()> {
        self.hourly = Wage::new(hourly)?;
        Ok(())
    }

    /// Returns the hire date.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Replaces the hire date from its `MM/DD/YY` text.
    pub fn set_hire_date(&mut self, hire_date: &str) -> RosterResult<()> {
        self.hire_date = parse_date("hire_date", hire_date)?;
        Ok(())
    }
}

impl Pay for Permanent {
    fn calc_pay(&self) -> f64 {
        self.hourly.calc_pay()
    }
}

/// An hourly employee who may not work past `last_day`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Temp {
    hourly: Wage,
    last_day: NaiveDate,
}

impl Temp {
    /// Validates the wage, then parses the `MM/DD/YY` last day.
    pub fn new(hourly: Decimal, last_day: &str) -> RosterResult<Self> {
        Ok(Self {
            hourly: Wage::new(hourly)?,
            last_day: parse_date("last_day", last_day)?,
        })
    }

    /// Returns the hourly wage.
    pub fn hourly(&self) -> Decimal {
        self.hourly.hourly()
    }

    /// Replaces the hourly wage.
    pub fn set_hourly(&mut self, hourly: Decimal) -> RosterResult<()> {
        self.hourly = Wage::new(hourly)?;
        Ok(())
    }

    /// Returns the last working day.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Replaces the last day from its `MM/DD/YY` text.
    pub fn set_last_day(&mut self, last_day: &str) -> RosterResult<()> {
        self.last_day = parse_date("last_day", last_day)?;
        Ok(())
    }
}

impl Pay for Temp {
    fn calc_pay(&self) -> f64 {
        self.hourly.calc_pay()
    }
}

/// The concrete kind of an employee and its kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum EmployeeKind {
    /// See [`Executive`].
    Executive(Executive),
    /// See [`Manager`].
    Manager(Manager),
    /// See [`Permanent`].
    Permanent(Permanent),
    /// See [`Temp`].
    Temp(Temp),
}

impl EmployeeKind {
    /// Returns the type tag for this kind.
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            Self::Executive(_) => EmployeeType::Executive,
            Self::Manager(_) => EmployeeType::Manager,
            Self::Permanent(_) => EmployeeType::Permanent,
            Self::Temp(_) => EmployeeType::Temp,
        }
    }

    /// Returns the salary or wage of this kind.
    pub fn pay_basis(&self) -> PayBasis {
        match self {
            Self::Executive(e) => PayBasis::Yearly(e.yearly()),
            Self::Manager(m) => PayBasis::Yearly(m.yearly()),
            Self::Permanent(p) => PayBasis::Hourly(p.hourly()),
            Self::Temp(t) => PayBasis::Hourly(t.hourly()),
        }
    }

    /// Renders the kind-specific suffix of the full record, starting with
    /// the pay field.
    fn record_suffix(&self) -> String {
        match self {
            Self::Executive(e) => format!("{}, {}", e.yearly(), e.role()),
            Self::Manager(m) => format!("{}, {}", m.yearly(), m.department()),
            Self::Permanent(p) => format!("{}, {}", p.hourly(), format_date(p.hire_date())),
            Self::Temp(t) => format!("{}, {}", t.hourly(), format_date(t.last_day())),
        }
    }
}

impl Pay for EmployeeKind {
    fn calc_pay(&self) -> f64 {
        match self {
            Self::Executive(e) => e.calc_pay(),
            Self::Manager(m) => m.calc_pay(),
            Self::Permanent(p) => p.calc_pay(),
            Self::Temp(t) => t.calc_pay(),
        }
    }
}

/// A validated employee record.
///
/// # Example
///
/// ```
/// use acme_roster::models::{Employee, IdAllocator, Pay};
/// use rust_decimal::Decimal;
///
/// let ids = IdAllocator::new();
/// let elon = Employee::executive(
///     &ids,
///     "Elon",
///     "x@acme-machining.com",
///     Decimal::from(60_000),
///     "CEO",
/// )
/// .unwrap();
///
/// assert_eq!(elon.calc_pay(), 1153.8461538461538);
/// assert_eq!(elon.to_string(), "1:Elon");
/// assert_eq!(
///     elon.to_record(),
///     "Elon, x@acme-machining.com, ./images/placeholder.png, 60000, CEO"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    #[serde(flatten)]
    base: EmployeeBase,
    #[serde(flatten)]
    kind: EmployeeKind,
}

impl Employee {
    /// Builds an executive. Fails with the first invalid field, in the order
    /// name, email, yearly, role.
    pub fn executive(
        ids: &IdAllocator,
        name: &str,
        email: &str,
        yearly: Decimal,
        role: &str,
    ) -> RosterResult<Self> {
        let (name, email) = validate_contact(name, email)?;
        let kind = EmployeeKind::Executive(Executive::new(yearly, role)?);
        Ok(Self::assemble(ids, name, email, kind))
    }

    /// Builds a manager. Fails with the first invalid field, in the order
    /// name, email, yearly, department.
    pub fn manager(
        ids: &IdAllocator,
        name: &str,
        email: &str,
        yearly: Decimal,
        department: &str,
    ) -> RosterResult<Self> {
        let (name, email) = validate_contact(name, email)?;
        let kind = EmployeeKind::Manager(Manager::new(yearly, department)?);
        Ok(Self::assemble(ids, name, email, kind))
    }

    /// Builds a permanent hourly employee. Fails with the first invalid
    /// field, in the order name, email, hourly, hire date.
    pub fn permanent(
        ids: &IdAllocator,
        name: &str,
        email: &str,
        hourly: Decimal,
        hire_date: &str,
    ) -> RosterResult<Self> {
        let (name, email) = validate_contact(name, email)?;
        let kind = EmployeeKind::Permanent(Permanent::new(hourly, hire_date)?);
        Ok(Self::assemble(ids, name, email, kind))
    }

    /// Builds a temporary hourly employee. Fails with the first invalid
    /// field, in the order name, email, hourly, last day.
    pub fn temp(
        ids: &IdAllocator,
        name: &str,
        email: &str,
        hourly: Decimal,
        last_day: &str,
    ) -> RosterResult<Self> {
        let (name, email) = validate_contact(name, email)?;
        let kind = EmployeeKind::Temp(Temp::new(hourly, last_day)?);
        Ok(Self::assemble(ids, name, email, kind))
    }

    /// Builds an employee of `employee_type` from the text form of its
    /// fields, as read from a data file or a form.
    ///
    /// Fields are checked in record order: name, email, image, pay, detail.
    /// `pay` is the yearly salary for salaried types and the hourly wage for
    /// hourly types; `detail` is the role, department, hire date or last day.
    pub fn from_fields(
        ids: &IdAllocator,
        employee_type: EmployeeType,
        name: &str,
        email: &str,
        image: &str,
        pay: &str,
        detail: &str,
    ) -> RosterResult<Self> {
        let (name, email) = validate_contact(name, email)?;
        let image = validate_image(image)?;
        let kind = match employee_type {
            EmployeeType::Executive => {
                EmployeeKind::Executive(Executive::new(parse_amount("yearly", pay)?, detail)?)
            }
            EmployeeType::Manager => {
                EmployeeKind::Manager(Manager::new(parse_amount("yearly", pay)?, detail)?)
            }
            EmployeeType::Permanent => {
                EmployeeKind::Permanent(Permanent::new(parse_amount("hourly", pay)?, detail)?)
            }
            EmployeeType::Temp => {
                EmployeeKind::Temp(Temp::new(parse_amount("hourly", pay)?, detail)?)
            }
        };
        let mut employee = Self::assemble(ids, name, email, kind);
        employee.base.image = image;
        Ok(employee)
    }

    /// Takes an id only once every field has passed.
    fn assemble(ids: &IdAllocator, name: String, email: String, kind: EmployeeKind) -> Self {
        let id_number = ids.next_id();
        debug!(
            id_number,
            employee_type = %kind.employee_type(),
            "Created employee record"
        );
        Self {
            base: EmployeeBase {
                id_number,
                name,
                email,
                image: IMAGE_PLACEHOLDER.to_string(),
            },
            kind,
        }
    }

    /// Returns the id assigned at construction.
    pub fn id_number(&self) -> u64 {
        self.base.id_number
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: &str) -> RosterResult<()> {
        self.base.name = validate_name(name)?;
        Ok(())
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.base.email
    }

    /// Replaces the email address.
    pub fn set_email(&mut self, email: &str) -> RosterResult<()> {
        self.base.email = validate_email(email)?;
        Ok(())
    }

    /// Returns the path of the employee's photo.
    pub fn image(&self) -> &str {
        &self.base.image
    }

    /// Replaces the photo path.
    pub fn set_image(&mut self, image: &str) -> RosterResult<()> {
        self.base.image = validate_image(image)?;
        Ok(())
    }

    /// Returns the type tag of this record.
    pub fn employee_type(&self) -> EmployeeType {
        self.kind.employee_type()
    }

    /// Returns the kind-specific fields.
    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    /// Returns the kind-specific fields for editing through their setters.
    pub fn kind_mut(&mut self) -> &mut EmployeeKind {
        &mut self.kind
    }

    /// Returns the salary or wage shown next to the employee.
    pub fn pay_basis(&self) -> PayBasis {
        self.kind.pay_basis()
    }

    /// Returns the yearly salary of a salaried employee.
    pub fn yearly(&self) -> Option<Decimal> {
        match self.pay_basis() {
            PayBasis::Yearly(amount) => Some(amount),
            PayBasis::Hourly(_) => None,
        }
    }

    /// Returns the hourly wage of an hourly employee.
    pub fn hourly(&self) -> Option<Decimal> {
        match self.pay_basis() {
            PayBasis::Hourly(amount) => Some(amount),
            PayBasis::Yearly(_) => None,
        }
    }

    /// Replaces the yearly salary of an executive or manager.
    pub fn set_yearly(&mut self, yearly: Decimal) -> RosterResult<()> {
        match &mut self.kind {
            EmployeeKind::Executive(e) => e.set_yearly(yearly),
            EmployeeKind::Manager(m) => m.set_yearly(yearly),
            other => Err(RosterError::PayBasisMismatch {
                field: "yearly",
                employee_type: other.employee_type().to_string(),
            }),
        }
    }

    /// Replaces the hourly wage of a permanent or temporary employee.
    pub fn set_hourly(&mut self, hourly: Decimal) -> RosterResult<()> {
        match &mut self.kind {
            EmployeeKind::Permanent(p) => p.set_hourly(hourly),
            EmployeeKind::Temp(t) => t.set_hourly(hourly),
            other => Err(RosterError::PayBasisMismatch {
                field: "hourly",
                employee_type: other.employee_type().to_string(),
            }),
        }
    }

    /// Renders every field except the id, comma separated, in the order the
    /// loader reads them back.
    pub fn to_record(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.base.name,
            self.base.email,
            self.base.image,
            self.kind.record_suffix()
        )
    }
}

impl Pay for Employee {
    fn calc_pay(&self) -> f64 {
        self.kind.calc_pay()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.base.id_number, self.base.name)
    }
}

fn validate_contact(name: &str, email: &str) -> RosterResult<(String, String)> {
    Ok((validate_name(name)?, validate_email(email)?))
}
