//! NoteStore implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Category, Note, NoteId, Timestamp};
use crate::store::{NoteStore, StoreResult};
use rusqlite::params;
use tracing::{debug, warn};

/// A row as read from the `notes` table, before validation.
struct StoredRow {
    id: Option<String>,
    text: Option<String>,
    category: Option<String>,
    created: Option<String>,
}

impl StoredRow {
    /// Converts the row into a note, repairing what can be repaired.
    ///
    /// Rows without text are dropped. A missing or malformed id gets a fresh
    /// one, a missing category becomes the fallback category and an
    /// unreadable timestamp becomes "unknown".
    fn into_note(self) -> Option<Note> {
        let id = match self.id.as_deref().map(str::parse::<NoteId>) {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                warn!(error = %e, "replacing invalid note id");
                NoteId::new()
            }
            None => NoteId::new(),
        };

        let category = self
            .category
            .as_deref()
            .and_then(|c| Category::new(c).ok())
            .unwrap_or_else(Category::fallback);

        let created = match self.created.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<Timestamp>() {
                Ok(ts) => Some(ts),
                Err(e) => {
                    warn!(%id, error = %e, "dropping unreadable timestamp");
                    None
                }
            },
        };

        match Note::new(id.clone(), self.text.unwrap_or_default(), category, created) {
            Ok(note) => Some(note),
            Err(e) => {
                warn!(%id, error = %e, "skipping stored note");
                None
            }
        }
    }
}

impl NoteStore for SqliteStore {
    fn load_all(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text, category, created FROM notes ORDER BY rowid")?;

        let rows = stmt.query_map([], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                text: row.get(1)?,
                category: row.get(2)?,
                created: row.get(3)?,
            })
        })?;

        let mut notes = Vec::new();
        for row in rows {
            if let Some(note) = row?.into_note() {
                notes.push(note);
            }
        }

        debug!(count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn replace_all(&mut self, notes: &[Note]) -> StoreResult<usize> {
        let tx = self.transaction()?;
        tx.execute("DELETE FROM notes", [])?;
        {
            let mut stmt = tx
                .conn()
                .prepare("INSERT INTO notes (id, text, category, created) VALUES (?1, ?2, ?3, ?4)")?;
            for note in notes {
                stmt.execute(params![
                    note.id().to_string(),
                    note.text(),
                    note.category().as_str(),
                    note.created().map(|ts| ts.to_string()),
                ])?;
            }
        }
        tx.commit()?;

        debug!(count = notes.len(), "saved notes");
        Ok(notes.len())
    }

    fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
