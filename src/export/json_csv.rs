// src/export/json_csv.rs

use crate::core::table::write_records;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::record::AttendanceRecord;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (same field names as the CSV header).
pub(crate) fn export_json(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, records.len());
    Ok(())
}

/// Export CSV with the `Date,Name,Status` schema.
pub(crate) fn export_csv(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    write_records(&mut wtr, records.iter().cloned())?;

    notify_export_success("CSV", path, records.len());
    Ok(())
}
