//! One interactive session: roster, ledger snapshot and the store behind it.

use crate::config::Config;
use crate::core::ledger::{Ledger, LedgerChange};
use crate::core::payroll::PayrollPolicy;
use crate::core::roster::Roster;
use crate::core::store::{AttendanceStore, Committed, open_store};
use crate::db::initialize::{init_db, seed_roster};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employees, update_salary};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::status::{Mark, Status};
use crate::ui::messages::warning;
use chrono::NaiveDate;

pub struct Session {
    pool: DbPool,
    store: Box<dyn AttendanceStore>,
    roster: Roster,
    ledger: Ledger,
    policy: PayrollPolicy,
}

/// A store that cannot be read must not end the session.
fn load_or_empty(store: &mut dyn AttendanceStore) -> Ledger {
    match store.load() {
        Ok(ledger) => ledger,
        Err(e) => {
            warning(format!(
                "Could not load attendance records from {}: {e}. Starting with an empty ledger.",
                store.describe()
            ));
            tracing::warn!(error = %e, store = %store.describe(), "ledger load failed");
            Ledger::new()
        }
    }
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let store = open_store(cfg)?;
        Self::with_store(cfg, store)
    }

    pub fn with_store(cfg: &Config, mut store: Box<dyn AttendanceStore>) -> AppResult<Self> {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        seed_roster(&mut pool.conn, &cfg.roster)?;

        let roster = Roster::new(load_employees(&pool.conn)?);
        let ledger = load_or_empty(store.as_mut());

        Ok(Self {
            pool,
            store,
            roster,
            ledger,
            policy: cfg.payroll_policy(),
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Record attendance for a roster employee. Returns the replaced status.
    pub fn mark(&mut self, date: NaiveDate, name: &str, mark: Mark) -> AppResult<Option<Status>> {
        let employee_name = self.roster.resolve(name)?.name.clone();

        let before = self.commit(LedgerChange::Upsert {
            date,
            employee_name: employee_name.clone(),
            mark,
        })?;
        Ok(before.get(date, &employee_name))
    }

    /// Delete one record. Names outside the roster are accepted so orphaned
    /// records can be removed. Returns whether a record existed.
    pub fn delete(&mut self, date: NaiveDate, name: &str) -> AppResult<bool> {
        let employee_name = self
            .roster
            .resolve(name)
            .map(|e| e.name.clone())
            .unwrap_or_else(|_| name.trim().to_string());
        let before = self.commit(LedgerChange::Delete {
            date,
            employee_name: employee_name.clone(),
        })?;
        Ok(before.get(date, &employee_name).is_some())
    }

    pub fn clear_all(&mut self) -> AppResult<usize> {
        let before = self.commit(LedgerChange::ClearAll)?;
        Ok(before.len())
    }

    pub fn set_salary(&mut self, name: &str, base_salary: f64) -> AppResult<Employee> {
        let mut roster = self.roster.clone();
        let updated = roster.set_salary(name, base_salary)?.clone();

        update_salary(&self.pool.conn, &updated.name, updated.base_salary)?;
        self.roster = roster;

        self.audit(
            "roster",
            &updated.name,
            &format!("Base salary set to {}", updated.base_salary),
        );
        Ok(updated)
    }

    /// The in-memory ledger is replaced only once the store accepted the change.
    ///
    /// Returns the stored ledger the change was applied to, which is fresher
    /// than the snapshot taken when the session opened.
    fn commit(&mut self, change: LedgerChange) -> AppResult<Ledger> {
        let Committed { before, after } = self.store.commit(&change)?;
        self.ledger = after;

        tracing::debug!(op = change.operation(), "change committed");
        self.audit(change.operation(), &change.describe(), "Change committed");
        Ok(before)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = audit(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}
