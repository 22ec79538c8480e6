use crate::db::migrate::run_pending_migrations;
use crate::db::queries::{count_employees, insert_employees};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Seed the roster from configuration when the employees table is empty.
///
/// Returns the number of employees inserted.
pub fn seed_roster(conn: &mut Connection, seed: &[Employee]) -> AppResult<usize> {
    if count_employees(conn)? > 0 {
        return Ok(0);
    }
    insert_employees(conn, seed)
}
