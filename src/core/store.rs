//! Persistence adapters for the attendance ledger.

use crate::config::{Config, StorageKind};
use crate::core::ledger::{Ledger, LedgerChange};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{apply_change, load_ledger};
use crate::errors::{AppError, AppResult};
use crate::remote::RemoteStore;
use crate::remote::github::GithubBlobStore;

/// Stored ledger right before and right after one committed change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub before: Ledger,
    pub after: Ledger,
}

/// Durable home of the ledger.
///
/// `commit` must either apply the whole change or leave the stored state
/// untouched. `before` is the stored state the change was applied to, which
/// can differ from what the caller loaded earlier.
pub trait AttendanceStore {
    fn load(&mut self) -> AppResult<Ledger>;

    fn commit(&mut self, change: &LedgerChange) -> AppResult<Committed>;

    /// Human readable location, for messages and logs.
    fn describe(&self) -> String;
}

/// Ledger kept in the local SQLite `attendance` table.
pub struct LocalStore {
    pool: DbPool,
    path: String,
}

impl LocalStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            path: path.to_string(),
        })
    }
}

impl AttendanceStore for LocalStore {
    fn load(&mut self) -> AppResult<Ledger> {
        load_ledger(&self.pool.conn)
    }

    fn commit(&mut self, change: &LedgerChange) -> AppResult<Committed> {
        let before = load_ledger(&self.pool.conn)?;
        apply_change(&mut self.pool.conn, change)?;
        let after = load_ledger(&self.pool.conn)?;
        Ok(Committed { before, after })
    }

    fn describe(&self) -> String {
        format!("local database {}", self.path)
    }
}

/// Build the store selected by the `storage` setting.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn AttendanceStore>> {
    match cfg.storage {
        StorageKind::Local => Ok(Box::new(LocalStore::open(&cfg.database)?)),
        StorageKind::Github => {
            let gh = cfg.github.as_ref().ok_or_else(|| {
                AppError::Config("storage is 'github' but the 'github' section is missing".into())
            })?;
            let blobs = GithubBlobStore::new(gh)?;
            Ok(Box::new(RemoteStore::new(
                blobs,
                gh.path.clone(),
                gh.max_attempts,
            )))
        }
    }
}
