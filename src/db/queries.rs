use crate::core::ledger::{Ledger, LedgerChange};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::record::AttendanceRecord;
use crate::models::status::Status;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_record(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = Status::from_label(&status_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidStatus(status_str.clone())))?;

    Ok(AttendanceRecord {
        date,
        employee_name: row.get("name")?,
        status,
    })
}

pub fn load_ledger(conn: &Connection) -> AppResult<Ledger> {
    let mut stmt = conn.prepare("SELECT date, name, status FROM attendance ORDER BY date, name")?;

    let rows = stmt.query_map([], map_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(Ledger::from_records(out))
}

/// Apply one change inside a single transaction.
pub fn apply_change(conn: &mut Connection, change: &LedgerChange) -> AppResult<()> {
    let tx = conn.transaction()?;

    match change {
        LedgerChange::Upsert {
            date,
            employee_name,
            mark,
        } => {
            let date_str = date.format("%Y-%m-%d").to_string();
            match mark.exception() {
                Some(status) => {
                    tx.execute(
                        "INSERT INTO attendance (date, name, status) VALUES (?1, ?2, ?3)
                         ON CONFLICT(date, name) DO UPDATE SET status = excluded.status",
                        params![date_str, employee_name, status.label()],
                    )?;
                }
                None => {
                    tx.execute(
                        "DELETE FROM attendance WHERE date = ?1 AND name = ?2",
                        params![date_str, employee_name],
                    )?;
                }
            }
        }
        LedgerChange::Delete {
            date,
            employee_name,
        } => {
            tx.execute(
                "DELETE FROM attendance WHERE date = ?1 AND name = ?2",
                params![date.format("%Y-%m-%d").to_string(), employee_name],
            )?;
        }
        LedgerChange::ClearAll => {
            tx.execute("DELETE FROM attendance", [])?;
        }
    }

    tx.commit()?;
    Ok(())
}

pub fn count_employees(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    Ok(n)
}

pub fn insert_employees(conn: &mut Connection, employees: &[Employee]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO employees (name, base_salary, position) VALUES (?1, ?2, ?3)",
        )?;
        for (i, e) in employees.iter().enumerate() {
            inserted += stmt.execute(params![e.name, e.base_salary, i as i64])?;
        }
    }
    tx.commit()?;
    Ok(inserted)
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT name, base_salary FROM employees ORDER BY position ASC, name ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Employee {
            name: row.get(0)?,
            base_salary: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Only the salary of an existing row may change.
pub fn update_salary(conn: &Connection, name: &str, base_salary: f64) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE employees SET base_salary = ?1 WHERE name = ?2",
        params![base_salary, name],
    )?;

    if changed == 0 {
        return Err(AppError::UnknownEmployee(name.to_string()));
    }
    Ok(())
}
