//! Monthly payout calculation.
//!
//! Rounding is round-half-to-even (`f64::round_ties_even`): unpaid units are
//! multiples of 0.5, so `.5` ties do occur and must round the same way every
//! time.

use crate::core::ledger::{Ledger, RecordFilter};
use crate::models::employee::Employee;
use crate::models::payout::MonthlyPayout;
use crate::models::period::Period;
use crate::models::status::Status;

/// Working days a monthly salary is spread over when pricing one unpaid day.
pub const DEFAULT_WORKING_DAYS_DIVISOR: f64 = 26.0;

/// Paid when an employee has no leave at all in the month.
pub const DEFAULT_ATTENDANCE_BONUS: f64 = 1000.0;

/// Leave units forgiven every month before deductions start.
pub const DEFAULT_FORGIVEN_UNITS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayrollPolicy {
    pub divisor: f64,
    pub attendance_bonus: f64,
    pub forgiven_units: f64,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            divisor: DEFAULT_WORKING_DAYS_DIVISOR,
            attendance_bonus: DEFAULT_ATTENDANCE_BONUS,
            forgiven_units: DEFAULT_FORGIVEN_UNITS,
        }
    }
}

impl PayrollPolicy {
    pub fn with_divisor(divisor: f64) -> Self {
        Self {
            divisor,
            ..Self::default()
        }
    }
}

/// Leave units for a set of statuses: 1.0 per leave, 0.5 per half-day.
pub fn leave_units<I>(statuses: I) -> f64
where
    I: IntoIterator<Item = Status>,
{
    let (mut leaves, mut halves) = (0u32, 0u32);
    for s in statuses {
        match s {
            Status::Leave => leaves += 1,
            Status::HalfDay => halves += 1,
        }
    }
    f64::from(leaves) * Status::Leave.units() + f64::from(halves) * Status::HalfDay.units()
}

pub fn compute(
    employee: &Employee,
    period: Period,
    ledger: &Ledger,
    policy: &PayrollPolicy,
) -> MonthlyPayout {
    let filter = RecordFilter::all()
        .employee(employee.name.clone())
        .in_period(period);

    let units = leave_units(ledger.query(|r| filter.matches(r)).map(|r| r.status));

    let bonus = if units == 0.0 {
        policy.attendance_bonus
    } else {
        0.0
    };
    let unpaid_units = (units - policy.forgiven_units).max(0.0);
    let daily_rate = employee.base_salary / policy.divisor;
    let raw_deduction = unpaid_units * daily_rate;

    MonthlyPayout {
        employee_name: employee.name.clone(),
        base_salary: employee.base_salary,
        leave_units: units,
        unpaid_units,
        daily_rate,
        bonus,
        deduction: raw_deduction.round_ties_even(),
        // the unrounded deduction feeds the final figure
        final_pay: (employee.base_salary + bonus - raw_deduction).round_ties_even(),
    }
}
