//! Tabular `Date,Name,Status` form of the ledger, used for the remote file
//! and for CSV export.

use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;

pub const HEADERS: [&str; 3] = ["Date", "Name", "Status"];

pub fn write_records<W, I>(wtr: &mut csv::Writer<W>, records: I) -> AppResult<()>
where
    W: std::io::Write,
    I: IntoIterator<Item = AttendanceRecord>,
{
    wtr.write_record(HEADERS)?;
    for r in records {
        wtr.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.employee_name,
            r.status.label().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv<I>(records: I) -> AppResult<String>
where
    I: IntoIterator<Item = AttendanceRecord>,
{
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_records(&mut wtr, records)?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// Parse a table back into a ledger. An empty document is an empty ledger;
/// a repeated (date, name) pair keeps the last row.
pub fn from_csv(content: &str) -> AppResult<Ledger> {
    if content.trim().is_empty() {
        return Ok(Ledger::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(HEADERS) {
        return Err(AppError::InvalidTable(format!(
            "unexpected header '{}'",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<AttendanceRecord>().enumerate() {
        let rec = row.map_err(|e| AppError::InvalidTable(format!("row {}: {e}", i + 1)))?;
        records.push(rec);
    }

    Ok(Ledger::from_records(records))
}
