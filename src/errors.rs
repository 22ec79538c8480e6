//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidPeriod(String),

    #[error("Invalid attendance status: {0} (use present, half-day or leave)")]
    InvalidStatus(String),

    #[error("Invalid salary: {0}")]
    InvalidSalary(String),

    #[error("Invalid attendance table: {0}")]
    InvalidTable(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    // ---------------------------
    // Remote store errors
    // ---------------------------
    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Remote store rejected the write after {0} attempt(s): revision changed concurrently")]
    RevisionConflict(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Remote(format!("request timed out: {e}"))
        } else {
            AppError::Remote(e.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
