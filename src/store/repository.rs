//! NoteStore trait and error types.

use crate::domain::Note;
use rusqlite::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving notes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another process holds a lock on the database.
    #[error("database is locked: {0}")]
    Locked(String),

    /// Any other database error.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns true if the failure was a lock held by someone else.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, _)
                if matches!(
                    failure.code,
                    ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
                ) =>
            {
                Self::Locked(err.to_string())
            }
            _ => Self::Database(err),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent backing for the note list.
///
/// The store is a snapshot of the whole list: it is read in full on startup
/// and rewritten in full on save.
pub trait NoteStore {
    /// Loads every stored note, in storage order.
    fn load_all(&self) -> StoreResult<Vec<Note>>;

    /// Replaces the stored notes with `notes`.
    ///
    /// Either every note is written or, on error, the previous contents are
    /// left untouched. Returns the number of notes written.
    fn replace_all(&mut self, notes: &[Note]) -> StoreResult<usize>;

    /// Returns the number of stored notes.
    fn count(&self) -> StoreResult<usize>;
}
