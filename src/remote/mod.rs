//! Ledger stored as a single table file in a revisioned blob store.
//!
//! Every write is guarded by the revision that was read: if someone else
//! wrote in between, the change is re-applied on top of their version.

pub mod github;

use crate::core::ledger::{Ledger, LedgerChange};
use crate::core::store::{AttendanceStore, Committed};
use crate::core::table;
use crate::errors::{AppError, AppResult};

/// File content plus the revision token it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub content: String,
    pub revision: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome {
    Committed { revision: String },
    /// The revision guard did not match the current revision.
    Conflict,
}

pub trait BlobStore {
    /// `None` when the file does not exist yet.
    fn fetch(&self, path: &str) -> AppResult<Option<Blob>>;

    /// Write `content` only if the file is still at `revision`
    /// (`None`: only if the file does not exist).
    fn put(
        &self,
        path: &str,
        content: &str,
        revision: Option<&str>,
        message: &str,
    ) -> AppResult<PutOutcome>;

    fn describe(&self, path: &str) -> String;
}

pub struct RemoteStore<B: BlobStore> {
    blobs: B,
    path: String,
    max_attempts: u32,
}

impl<B: BlobStore> RemoteStore<B> {
    pub fn new(blobs: B, path: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            blobs,
            path: path.into(),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    fn read(&self) -> AppResult<(Ledger, Option<String>)> {
        match self.blobs.fetch(&self.path)? {
            Some(blob) => Ok((table::from_csv(&blob.content)?, Some(blob.revision))),
            None => Ok((Ledger::new(), None)),
        }
    }
}

impl<B: BlobStore> AttendanceStore for RemoteStore<B> {
    fn load(&mut self) -> AppResult<Ledger> {
        self.read().map(|(ledger, _)| ledger)
    }

    fn commit(&mut self, change: &LedgerChange) -> AppResult<Committed> {
        let message = format!("staffledger: {} {}", change.operation(), change.describe());

        for attempt in 1..=self.max_attempts {
            let (before, revision) = self.read()?;
            let mut after = before.clone();
            after.apply(change);

            if after == before {
                tracing::debug!(path = %self.path, "change is a no-op, nothing written");
                return Ok(Committed { before, after });
            }

            let content = table::to_csv(after.records())?;

            match self
                .blobs
                .put(&self.path, &content, revision.as_deref(), &message)?
            {
                PutOutcome::Committed { revision } => {
                    tracing::debug!(attempt, %revision, path = %self.path, "remote ledger written");
                    return Ok(Committed { before, after });
                }
                PutOutcome::Conflict => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        path = %self.path,
                        "revision changed during write, retrying"
                    );
                }
            }
        }

        Err(AppError::RevisionConflict(self.max_attempts))
    }

    fn describe(&self) -> String {
        self.blobs.describe(&self.path)
    }
}
