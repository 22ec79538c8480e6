use super::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Composite identity of an attendance exception.
///
/// Ordered by date first so ledger iteration is chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    pub date: NaiveDate,
    pub employee_name: String,
}

impl RecordKey {
    pub fn new(date: NaiveDate, employee_name: impl Into<String>) -> Self {
        Self {
            date,
            employee_name: employee_name.into(),
        }
    }
}

/// One row of the ledger: `Date,Name,Status` in tabular form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Name")]
    pub employee_name: String,
    #[serde(rename = "Status")]
    pub status: Status,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, employee_name: impl Into<String>, status: Status) -> Self {
        Self {
            date,
            employee_name: employee_name.into(),
            status,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.date, self.employee_name.clone())
    }
}
