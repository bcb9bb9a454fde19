//! Persistent note storage: the `NoteStore` trait and its SQLite backend.

mod repository;
mod schema;
mod sqlite;

pub use repository::{NoteStore, StoreError, StoreResult};
pub use schema::create_schema;
pub use sqlite::{SqliteStore, Transaction};
