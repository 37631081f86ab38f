//! Weekly pay report generation.
//!
//! This module turns a roster into a pay report: each employee's weekly pay
//! from [`Pay::calc_pay`], rounded to cents, with totals per pay basis.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{Employee, EmployeeType, Pay, PayBasis};
use crate::roster::Roster;

/// One employee's line in the pay report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayReportLine {
    /// The employee's id.
    pub id_number: u64,
    /// The employee's type tag.
    pub employee_type: EmployeeType,
    /// The employee's name.
    pub name: String,
    /// The salary or wage the weekly pay was computed from.
    pub pay_basis: PayBasis,
    /// Weekly pay rounded to cents.
    pub weekly_pay: Decimal,
}

/// Totals across all lines of a pay report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PayReportTotals {
    /// Weekly pay of executives and managers.
    pub salaried_total: Decimal,
    /// Weekly pay of permanent and temporary staff.
    pub hourly_total: Decimal,
    /// Sum of every line.
    pub gross_total: Decimal,
    /// Number of employees reported.
    pub headcount: usize,
}

/// A weekly pay report for a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One line per employee, in roster order.
    pub lines: Vec<PayReportLine>,
    /// Totals across all lines.
    pub totals: PayReportTotals,
}

impl PayReport {
    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Rounds a weekly pay amount to cents, halves away from zero.
///
/// # Example
///
/// ```
/// use acme_roster::calculation::weekly_pay_in_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     weekly_pay_in_cents(60000.0 / 52.0),
///     Decimal::from_str("1153.85").unwrap()
/// );
/// ```
pub fn weekly_pay_in_cents(amount: f64) -> Decimal {
    Decimal::from_f64(amount)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn report_line(employee: &Employee) -> PayReportLine {
    PayReportLine {
        id_number: employee.id_number(),
        employee_type: employee.employee_type(),
        name: employee.name().to_string(),
        pay_basis: employee.pay_basis(),
        weekly_pay: weekly_pay_in_cents(employee.calc_pay()),
    }
}

/// Generates the weekly pay report for every employee in `roster`.
///
/// # Example
///
/// ```
/// use acme_roster::Roster;
/// use acme_roster::calculation::generate_pay_report;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster
///     .add_temp("Peter", "p@acme-machining.com", Decimal::from(16), "02/19/23")
///     .unwrap();
///
/// let report = generate_pay_report(&roster);
/// assert_eq!(report.totals.gross_total, Decimal::from(640));
/// ```
pub fn generate_pay_report(roster: &Roster) -> PayReport {
    let lines: Vec<PayReportLine> = roster.iter().map(report_line).collect();

    let mut totals = PayReportTotals {
        headcount: lines.len(),
        ..PayReportTotals::default()
    };
    for line in &lines {
        if line.employee_type.is_salaried() {
            totals.salaried_total += line.weekly_pay;
        } else {
            totals.hourly_total += line.weekly_pay;
        }
    }
    totals.gross_total = totals.salaried_total + totals.hourly_total;

    let report = PayReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        lines,
        totals,
    };

    info!(
        report_id = %report.report_id,
        headcount = report.totals.headcount,
        gross_total = %report.totals.gross_total,
        "Generated weekly pay report"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
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
            .add_manager("Steve", "s@acme-machining.com", dec("78000"), "HR")
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
    fn test_report_has_one_line_per_employee() {
        let report = generate_pay_report(&create_test_roster());

        assert_eq!(report.lines.len(), 4);
        assert_eq!(report.totals.headcount, 4);
        assert_eq!(report.lines[0].weekly_pay, dec("1153.85"));
        assert_eq!(report.lines[1].weekly_pay, dec("1500"));
        assert_eq!(report.lines[2].weekly_pay, dec("648.40"));
        assert_eq!(report.lines[3].weekly_pay, dec("640"));
        assert_eq!(report.lines[3].pay_basis, PayBasis::Hourly(dec("16.00")));
    }

    #[test]
    fn test_report_totals_split_by_pay_basis() {
        let report = generate_pay_report(&create_test_roster());

        assert_eq!(report.totals.salaried_total, dec("2653.85"));
        assert_eq!(report.totals.hourly_total, dec("1288.40"));
        assert_eq!(report.totals.gross_total, dec("3942.25"));
    }

    #[test]
    fn test_empty_roster_reports_zero() {
        let report = generate_pay_report(&Roster::new());
        assert!(report.lines.is_empty());
        assert_eq!(report.totals, PayReportTotals::default());
    }

    #[test]
    fn test_weekly_pay_rounds_half_away_from_zero() {
        assert_eq!(weekly_pay_in_cents(0.125), dec("0.13"));
        assert_eq!(weekly_pay_in_cents(640.0), dec("640.00"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = generate_pay_report(&create_test_roster());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["lines"][0]["name"], "Elon");
        assert_eq!(json["lines"][0]["employee_type"], "Executive");
        assert_eq!(json["lines"][0]["pay_basis"]["basis"], "yearly");
        assert_eq!(json["totals"]["headcount"], 4);
        assert_eq!(json["report_id"], report.report_id.to_string());
    }
}
