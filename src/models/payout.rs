use serde::Serialize;

/// Derived monthly figures for one employee. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPayout {
    pub employee_name: String,
    pub base_salary: f64,
    pub leave_units: f64,
    pub unpaid_units: f64,
    pub daily_rate: f64,
    pub bonus: f64,
    pub deduction: f64,
    pub final_pay: f64,
}
