//! SQLite schema for the notes table.

use rusqlite::Connection;

/// Creates the single `notes` table if it does not exist yet.
///
/// Idempotent; called on every open. There is no migration step: a database
/// written by this version is read back by this version.
///
/// # Columns
/// - `id` - ULID of the note
/// - `text` - note text, never empty
/// - `category` - category label; NULL is read back as the fallback category
/// - `created` - `YYYY-MM-DD HH:MM:SS` local time, or NULL when unknown
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id TEXT PRIMARY KEY NOT NULL,
            text TEXT NOT NULL,
            category TEXT,
            created TEXT
        );",
    )
}
