//! SQLite-backed note store.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

/// SQLite-backed note store.
///
/// Owns the database connection; the schema is created on open.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
