// src/export/mod.rs

mod fs_utils;
mod json_csv;

use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

pub(crate) use fs_utils::ensure_writable;

/// Common helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!(
        "{label} export completed: {} ({rows} record(s))",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// High level export of an already filtered record set.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `records` to `path`. Existing files are only replaced with
    /// `force` or after confirmation. Returns the number of rows written.
    pub fn export(
        records: &[AttendanceRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if path.as_os_str().is_empty() {
            return Err(AppError::Export("output file path is empty".into()));
        }

        ensure_writable(path, force)?;

        if records.is_empty() {
            warning("No records found for the selected filter; writing headers only.");
        }

        match format {
            ExportFormat::Csv => json_csv::export_csv(records, path)?,
            ExportFormat::Json => json_csv::export_json(records, path)?,
        }

        Ok(records.len())
    }
}
