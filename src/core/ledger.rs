//! In-memory attendance ledger.
//!
//! Records are keyed by `(date, employee)` so there can never be two entries
//! for the same pair; "Present" is the absence of an entry.

use crate::models::period::Period;
use crate::models::record::{AttendanceRecord, RecordKey};
use crate::models::status::{Mark, Status};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A single mutation, replayable against any copy of the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerChange {
    Upsert {
        date: NaiveDate,
        employee_name: String,
        mark: Mark,
    },
    Delete {
        date: NaiveDate,
        employee_name: String,
    },
    ClearAll,
}

impl LedgerChange {
    /// Short operation name used in the audit log.
    pub fn operation(&self) -> &'static str {
        match self {
            LedgerChange::Upsert { .. } => "mark",
            LedgerChange::Delete { .. } => "del",
            LedgerChange::ClearAll => "clear",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            LedgerChange::Upsert {
                date,
                employee_name,
                mark,
            } => format!("{employee_name} on {date}: {}", mark.label()),
            LedgerChange::Delete {
                date,
                employee_name,
            } => format!("{employee_name} on {date}"),
            LedgerChange::ClearAll => "all records".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: BTreeMap<RecordKey, Status>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = AttendanceRecord>,
    {
        let mut ledger = Ledger::new();
        for r in records {
            ledger.entries.insert(RecordKey::new(r.date, r.employee_name), r.status);
        }
        ledger
    }

    /// Set the attendance of one employee on one day.
    ///
    /// Returns the status that was replaced, if any.
    pub fn upsert(&mut self, date: NaiveDate, employee_name: &str, mark: Mark) -> Option<Status> {
        let key = RecordKey::new(date, employee_name);
        match mark.exception() {
            Some(status) => self.entries.insert(key, status),
            None => self.entries.remove(&key),
        }
    }

    /// Remove one record. Missing records are not an error.
    pub fn delete(&mut self, date: NaiveDate, employee_name: &str) -> bool {
        self.entries
            .remove(&RecordKey::new(date, employee_name))
            .is_some()
    }

    pub fn clear_all(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn apply(&mut self, change: &LedgerChange) {
        match change {
            LedgerChange::Upsert {
                date,
                employee_name,
                mark,
            } => {
                self.upsert(*date, employee_name, *mark);
            }
            LedgerChange::Delete {
                date,
                employee_name,
            } => {
                self.delete(*date, employee_name);
            }
            LedgerChange::ClearAll => {
                self.clear_all();
            }
        }
    }

    pub fn get(&self, date: NaiveDate, employee_name: &str) -> Option<Status> {
        self.entries
            .get(&RecordKey::new(date, employee_name))
            .copied()
    }

    /// Lazily yield the records accepted by `pred`, in (date, name) order.
    pub fn query<'a, P>(&'a self, pred: P) -> impl Iterator<Item = AttendanceRecord> + 'a
    where
        P: Fn(&AttendanceRecord) -> bool + 'a,
    {
        self.records().filter(move |r| pred(r))
    }

    pub fn records(&self) -> impl Iterator<Item = AttendanceRecord> + '_ {
        self.entries
            .iter()
            .map(|(k, s)| AttendanceRecord::new(k.date, k.employee_name.clone(), *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Common predicate over date / employee / month.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub date: Option<NaiveDate>,
    pub employee_name: Option<String>,
    pub period: Option<Period>,
}

impl RecordFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn employee(mut self, name: impl Into<String>) -> Self {
        self.employee_name = Some(name.into());
        self
    }

    pub fn in_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn matches(&self, r: &AttendanceRecord) -> bool {
        self.date.is_none_or(|d| r.date == d)
            && self
                .employee_name
                .as_deref()
                .is_none_or(|n| r.employee_name == n)
            && self.period.is_none_or(|p| p.contains(r.date))
    }
}
