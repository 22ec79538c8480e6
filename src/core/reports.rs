//! Read-only views over the ledger used by `summary`, `records` and `history`.

use crate::core::ledger::{Ledger, RecordFilter};
use crate::core::payroll::{self, PayrollPolicy};
use crate::core::roster::Roster;
use crate::models::payout::MonthlyPayout;
use crate::models::period::Period;
use crate::models::record::AttendanceRecord;
use crate::models::status::Status;
use chrono::NaiveDate;

pub struct MonthlySummary {
    pub period: Period,
    pub rows: Vec<MonthlyPayout>,
}

impl MonthlySummary {
    pub fn total_final_pay(&self) -> f64 {
        self.rows.iter().map(|r| r.final_pay).sum()
    }

    pub fn total_deductions(&self) -> f64 {
        self.rows.iter().map(|r| r.deduction).sum()
    }
}

/// One payout row per roster employee. Records of unknown names are ignored.
pub fn monthly_summary(
    roster: &Roster,
    ledger: &Ledger,
    period: Period,
    policy: &PayrollPolicy,
) -> MonthlySummary {
    let rows = roster
        .iter()
        .map(|emp| payroll::compute(emp, period, ledger, policy))
        .collect();

    MonthlySummary { period, rows }
}

/// Newest first; same-day records by name.
fn sort_for_display(records: &mut [AttendanceRecord]) {
    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.employee_name.cmp(&b.employee_name))
    });
}

pub fn monthly_log(ledger: &Ledger, period: Period) -> Vec<AttendanceRecord> {
    let filter = RecordFilter::all().in_period(period);
    let mut out: Vec<_> = ledger.query(|r| filter.matches(r)).collect();
    sort_for_display(&mut out);
    out
}

pub fn employee_history(ledger: &Ledger, employee_name: &str) -> Vec<AttendanceRecord> {
    let filter = RecordFilter::all().employee(employee_name);
    let mut out: Vec<_> = ledger.query(|r| filter.matches(r)).collect();
    sort_for_display(&mut out);
    out
}

/// Leave and half-day dates of one employee in a month, oldest first.
pub fn exception_dates(
    ledger: &Ledger,
    employee_name: &str,
    period: Period,
) -> (Vec<NaiveDate>, Vec<NaiveDate>) {
    let filter = RecordFilter::all().employee(employee_name).in_period(period);

    let mut leaves = Vec::new();
    let mut half_days = Vec::new();
    for r in ledger.query(|r| filter.matches(r)) {
        match r.status {
            Status::Leave => leaves.push(r.date),
            Status::HalfDay => half_days.push(r.date),
        }
    }
    (leaves, half_days)
}
