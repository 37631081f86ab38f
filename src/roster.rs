//! The in-memory roster of employees.
//!
//! A [`Roster`] keeps employees in insertion order together with the
//! [`IdAllocator`] that numbers them, so every record it holds was built
//! from the same counter.

use std::io::{BufRead, Write};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::RosterConfig;
use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, EmployeeType, IdAllocator};
use crate::persistence::{self, Loader, RowFailure};

/// One line of the roster table shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRow {
    /// The employee's id.
    pub id_number: u64,
    /// The employee's type tag.
    pub employee_type: EmployeeType,
    /// The employee's name.
    pub name: String,
    /// Yearly salary for salaried employees, hourly wage otherwise.
    pub pay: Decimal,
    /// The employee's email address.
    pub email: String,
}

/// An ordered collection of employees sharing one id counter.
///
/// # Example
///
/// ```
/// use acme_roster::Roster;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// let id = roster
///     .add_manager("Steve Carell", "sc@acme-machining.com", Decimal::from(70_000), "FINANCE")
///     .unwrap();
///
/// roster.get_mut(id).unwrap().set_name("Michael Scott").unwrap();
/// assert_eq!(roster.get(id).unwrap().to_string(), "1:Michael Scott");
/// ```
#[derive(Debug, Default)]
pub struct Roster {
    ids: IdAllocator,
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster whose first id is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty roster drawing ids from `ids`.
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            ids,
            employees: Vec::new(),
        }
    }

    /// Creates an empty roster numbered from the configured first id.
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::with_allocator(IdAllocator::starting_at(config.first_id))
    }

    /// Returns the roster's id allocator.
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Builds an employee with the roster's allocator and appends it.
    ///
    /// Returns the new employee's id. Nothing is appended on failure.
    pub fn add_with<F>(&mut self, build: F) -> RosterResult<u64>
    where
        F: FnOnce(&IdAllocator) -> RosterResult<Employee>,
    {
        let employee = build(&self.ids)?;
        self.push(employee)
    }

    /// Appends an employee that was built elsewhere and returns its id.
    ///
    /// Fails with `DuplicateId` if the roster already holds an employee with
    /// that id. On success the roster's allocator is moved past the id, so
    /// later additions never reuse it.
    pub fn push(&mut self, employee: Employee) -> RosterResult<u64> {
        let id_number = employee.id_number();
        if self.get(id_number).is_some() {
            return Err(RosterError::DuplicateId { id_number });
        }

        self.ids.reserve(id_number);
        self.employees.push(employee);
        debug!(id_number, total = self.employees.len(), "Pushed employee onto roster");
        Ok(id_number)
    }

    /// Adds an executive. See [`Employee::executive`].
    pub fn add_executive(
        &mut self,
        name: &str,
        email: &str,
        yearly: Decimal,
        role: &str,
    ) -> RosterResult<u64> {
        self.add_with(|ids| Employee::executive(ids, name, email, yearly, role))
    }

    /// Adds a manager. See [`Employee::manager`].
    pub fn add_manager(
        &mut self,
        name: &str,
        email: &str,
        yearly: Decimal,
        department: &str,
    ) -> RosterResult<u64> {
        self.add_with(|ids| Employee::manager(ids, name, email, yearly, department))
    }

    /// Adds a permanent hourly employee. See [`Employee::permanent`].
    pub fn add_permanent(
        &mut self,
        name: &str,
        email: &str,
        hourly: Decimal,
        hire_date: &str,
    ) -> RosterResult<u64> {
        self.add_with(|ids| Employee::permanent(ids, name, email, hourly, hire_date))
    }

    /// Adds a temporary hourly employee. See [`Employee::temp`].
    pub fn add_temp(
        &mut self,
        name: &str,
        email: &str,
        hourly: Decimal,
        last_day: &str,
    ) -> RosterResult<u64> {
        self.add_with(|ids| Employee::temp(ids, name, email, hourly, last_day))
    }

    /// Looks up an employee by id.
    pub fn get(&self, id_number: u64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id_number() == id_number)
    }

    /// Looks up an employee by id for editing through its setters.
    pub fn get_mut(&mut self, id_number: u64) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id_number() == id_number)
    }

    /// Returns the employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Iterates over the employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Appends every valid row from `reader` and returns the rejected rows.
    pub fn load<R: BufRead>(&mut self, reader: R) -> RosterResult<Vec<RowFailure>> {
        let outcome = Loader::new(&self.ids).load(reader)?;
        Ok(self.absorb(outcome))
    }

    /// Appends every valid row from the file at `path` and returns the
    /// rejected rows.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> RosterResult<Vec<RowFailure>> {
        let outcome = Loader::new(&self.ids).load_file(path)?;
        Ok(self.absorb(outcome))
    }

    fn absorb(&mut self, outcome: persistence::LoadOutcome) -> Vec<RowFailure> {
        debug!(
            added = outcome.employees.len(),
            total = self.employees.len() + outcome.employees.len(),
            "Added loaded employees to roster"
        );
        self.employees.extend(outcome.employees);
        outcome.failures
    }

    /// Writes every employee to `writer`. Returns the number of rows written.
    pub fn save<W: Write>(&self, writer: &mut W) -> RosterResult<usize> {
        persistence::save(writer, &self.employees)
    }

    /// Writes every employee to the file at `path`.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> RosterResult<usize> {
        persistence::save_file(path, &self.employees)
    }

    /// Returns the table view: id, type, name, pay and email per employee.
    pub fn table_rows(&self) -> Vec<RosterRow> {
        self.employees
            .iter()
            .map(|e| RosterRow {
                id_number: e.id_number(),
                employee_type: e.employee_type(),
                name: e.name().to_string(),
                pay: e.pay_basis().amount(),
                email: e.email().to_string(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeKind, Pay};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add_executive("Elon", "x@acme-machining.com", dec("60000"), "CEO")
            .unwrap();
        roster
            .add_manager("Steve Carell", "sc@acme-machining.com", dec("70000"), "FINANCE")
            .unwrap();
        roster
            .add_permanent("Wayne", "w@acme-machining.com", dec("16.21"), "09/27/82")
            .unwrap();
        roster
            .add_temp("Peter", "p@acme-machining.com", dec("16.00"), "02/19/23")
            .unwrap();
        roster
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let roster = create_test_roster();
        let ids: Vec<u64> = roster.iter().map(Employee::id_number).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(roster.len(), 4);
        assert!(!roster.is_empty());
    }

    #[test]
    fn test_failed_add_leaves_roster_unchanged() {
        let mut roster = create_test_roster();
        let result = roster.add_temp("Kim", "k@acme-machining.com", dec("10"), "01/01/24");
        assert!(matches!(result, Err(RosterError::InvalidField { field: "hourly", .. })));
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.ids().peek(), 5);
    }

    #[test]
    fn test_push_accepts_employee_built_elsewhere() {
        let mut roster = create_test_roster();
        let external = IdAllocator::starting_at(20);
        let employee =
            Employee::temp(&external, "Kim", "k@acme-machining.com", dec("18"), "01/01/24").unwrap();

        assert_eq!(roster.push(employee).unwrap(), 20);
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.get(20).unwrap().name(), "Kim");

        let next = roster
            .add_executive("Elon", "e@acme-machining.com", dec("60000"), "CIO")
            .unwrap();
        assert_eq!(next, 21);
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let mut roster = create_test_roster();
        let other = IdAllocator::starting_at(2);
        let clash =
            Employee::manager(&other, "Pam", "pam@acme-machining.com", dec("55000"), "HR").unwrap();

        match roster.push(clash) {
            Err(RosterError::DuplicateId { id_number }) => assert_eq!(id_number, 2),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.get(2).unwrap().name(), "Steve Carell");
    }

    #[test]
    fn test_from_config_uses_first_id() {
        let config = RosterConfig {
            first_id: 100,
            ..RosterConfig::default()
        };
        let mut roster = Roster::from_config(&config);
        let id = roster
            .add_executive("Elon", "x@acme-machining.com", dec("60000"), "CFO")
            .unwrap();
        assert_eq!(id, 100);
    }

    #[test]
    fn test_get_mut_edits_through_setters() {
        let mut roster = create_test_roster();
        let employee = roster.get_mut(2).unwrap();
        assert!(employee.set_email("steve@gmail.com").is_err());
        if let EmployeeKind::Manager(m) = employee.kind_mut() {
            m.set_department("MACHINING").unwrap();
        }

        let employee = roster.get(2).unwrap();
        assert_eq!(employee.email(), "sc@acme-machining.com");
        assert!(employee.to_record().ends_with("70000, MACHINING"));
        assert!(roster.get(99).is_none());
    }

    #[test]
    fn test_table_rows_show_pay_field_by_basis() {
        let roster = create_test_roster();
        let rows = roster.table_rows();

        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            RosterRow {
                id_number: 1,
                employee_type: EmployeeType::Executive,
                name: "Elon".to_string(),
                pay: dec("60000"),
                email: "x@acme-machining.com".to_string(),
            }
        );
        assert_eq!(rows[3].pay, dec("16.00"));
        assert_eq!(rows[3].employee_type, EmployeeType::Temp);
    }

    #[test]
    fn test_save_then_load_into_new_roster() {
        let roster = create_test_roster();
        let mut buffer = Vec::new();
        assert_eq!(roster.save(&mut buffer).unwrap(), 4);

        let mut reloaded = Roster::with_allocator(IdAllocator::starting_at(10));
        let failures = reloaded.load(buffer.as_slice()).unwrap();

        assert!(failures.is_empty());
        assert_eq!(reloaded.len(), 4);
        for (before, after) in roster.iter().zip(&reloaded) {
            assert_eq!(after.id_number(), before.id_number() + 9);
            assert_eq!(after.to_record(), before.to_record());
            assert_eq!(after.calc_pay(), before.calc_pay());
        }
    }
}
