//! Plain-text salary slip and its share link.

use crate::models::employee::Employee;
use crate::models::payout::MonthlyPayout;
use crate::models::period::Period;
use crate::utils::formatting::{amount, units};
use chrono::NaiveDate;
use std::fmt::Write;

pub const DEFAULT_SHARE_URL: &str = "https://wa.me/";

pub struct SalarySlip {
    pub period: Period,
    pub employee: Employee,
    pub payout: MonthlyPayout,
    pub leave_dates: Vec<NaiveDate>,
    pub half_day_dates: Vec<NaiveDate>,
}

fn date_list(dates: &[NaiveDate]) -> String {
    if dates.is_empty() {
        return "None".to_string();
    }
    dates
        .iter()
        .map(|d| d.format("%d-%m").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SalarySlip {
    pub fn render(&self) -> String {
        let p = &self.payout;
        let mut out = String::new();

        // writing into a String cannot fail
        let _ = writeln!(out, "Salary Slip: {}", self.period.title());
        let _ = writeln!(out, "Employee: {}", self.employee.name);
        let _ = writeln!(out, "Base Salary: {}", amount(self.employee.base_salary));
        let _ = writeln!(out, "Leave Dates: {}", date_list(&self.leave_dates));
        let _ = writeln!(out, "Half-Day Dates: {}", date_list(&self.half_day_dates));
        let _ = writeln!(out, "Total Leave Units: {}", units(p.leave_units));
        let _ = writeln!(out, "Bonus: {}", amount(p.bonus));
        let _ = writeln!(
            out,
            "Deduction: {} ({} unpaid units)",
            amount(p.deduction),
            units(p.unpaid_units)
        );
        let _ = write!(out, "Final Payout: {}", amount(p.final_pay));

        out
    }

    /// Chat share link with the rendered slip as URL-escaped `text` parameter.
    ///
    /// `phone` (digits only, international format) becomes a path segment.
    pub fn share_link(&self, base_url: &str, phone: Option<&str>) -> String {
        let mut url = base_url.trim_end_matches('/').to_string();
        url.push('/');

        if let Some(number) = phone {
            let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
            url.push_str(&digits);
        }

        format!("{url}?text={}", urlencoding::encode(&self.render()))
    }
}
