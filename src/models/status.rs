use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state attendance selection as entered by the user.
///
/// `Present` is never stored: it only clears an existing exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Present,
    HalfDay,
    Leave,
}

impl Mark {
    /// Helper: convert input code from CLI (any case, short or long form)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "p" | "present" => Some(Mark::Present),
            "h" | "half" | "half-day" | "halfday" | "half_day" => Some(Mark::HalfDay),
            "l" | "leave" => Some(Mark::Leave),
            _ => None,
        }
    }

    /// The status to store for this mark, `None` for `Present`.
    pub fn exception(self) -> Option<Status> {
        match self {
            Mark::Present => None,
            Mark::HalfDay => Some(Status::HalfDay),
            Mark::Leave => Some(Status::Leave),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mark::Present => "Present",
            Mark::HalfDay => Status::HalfDay.label(),
            Mark::Leave => Status::Leave.label(),
        }
    }
}

/// Stored attendance exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Leave")]
    Leave,
    #[serde(rename = "Half-Day")]
    HalfDay,
}

impl Status {
    /// Convert enum → table/DB string
    pub fn label(self) -> &'static str {
        match self {
            Status::Leave => "Leave",
            Status::HalfDay => "Half-Day",
        }
    }

    /// Convert table/DB string → enum
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Leave" => Some(Status::Leave),
            "Half-Day" => Some(Status::HalfDay),
            _ => None,
        }
    }

    /// Leave units charged for one record of this status.
    pub fn units(self) -> f64 {
        match self {
            Status::Leave => 1.0,
            Status::HalfDay => 0.5,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
