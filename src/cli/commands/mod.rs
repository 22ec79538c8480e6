pub mod audit;
pub mod clear;
pub mod config;
pub mod del;
pub mod export;
pub mod history;
pub mod init;
pub mod mark;
pub mod records;
pub mod roster;
pub mod slip;
pub mod summary;

use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }

    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// `--month` value, defaulting to the current month.
pub(crate) fn resolve_period(month: Option<&str>) -> AppResult<Period> {
    match month {
        Some(m) => Period::parse(m),
        None => Ok(Period::of(date::today())),
    }
}
