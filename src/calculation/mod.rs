//! Pay calculation over a whole roster.
//!
//! Per-employee weekly pay lives on the [`Pay`](crate::models::Pay) trait;
//! this module aggregates it into a weekly pay report with totals per pay
//! basis.

mod pay_report;

pub use pay_report::{
    PayReport, PayReportLine, PayReportTotals, generate_pay_report, weekly_pay_in_cents,
};
