//! Editing session: the note list plus filter, selection and edit state.
//!
//! A session mirrors what a single note-taking window keeps in memory: the
//! sorted note list, the active category filter and search query, the row the
//! user selected, the note currently being edited, and the category that the
//! next added or edited note receives. Every mutation re-sorts the list and
//! drops the selection, as a redrawn list would.

mod status;


pub use status::Status;

use crate::domain::{Category, CategoryFilter, Note, NoteFilter, NoteId, NoteList, Timestamp};
use crate::store::{NoteStore, StoreError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors reported by session operations.
///
/// Everything except [`SessionError::Store`] is a warning: the user asked for
/// something that does not apply to the current state, and nothing changed.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no note text entered")]
    EmptyText,

    #[error("no note selected")]
    NothingSelected,

    #[error("no note is being edited")]
    NotEditing,

    #[error("row {row} is out of range ({visible} shown)")]
    RowOutOfRange { row: usize, visible: usize },

    #[error("unknown category '{name}' (choose one of: {known})")]
    UnknownCategory { name: String, known: String },

    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Returns true for user-facing warnings that left the session unchanged.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

/// In-memory editing session backed by a [`NoteStore`].
pub struct Session<S: NoteStore> {
    store: S,
    notes: NoteList,
    categories: Vec<Category>,
    filter: NoteFilter,
    input_category: Category,
    selection: Option<NoteId>,
    editing: Option<NoteId>,
}

impl<S: NoteStore> Session<S> {
    /// Loads every note from the store and starts a session.
    ///
    /// `categories` are the categories offered for new notes; an empty list
    /// falls back to the built-in defaults. `default_category` is the initial
    /// input category and is added to the list if missing.
    pub fn load(
        store: S,
        categories: Vec<Category>,
        default_category: Category,
    ) -> SessionResult<Self> {
        let notes = NoteList::from_notes(store.load_all()?);
        let mut categories = if categories.is_empty() {
            Category::defaults()
        } else {
            categories
        };
        if !categories.contains(&default_category) {
            categories.push(default_category.clone());
        }

        info!(notes = notes.len(), "session loaded");
        Ok(Self {
            store,
            notes,
            categories,
            filter: NoteFilter::all(),
            input_category: default_category,
            selection: None,
            editing: None,
        })
    }

    // ===========================================
    // Accessors
    // ===========================================

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub fn input_category(&self) -> &Category {
        &self.input_category
    }

    /// Returns the selected note, if any.
    pub fn selected(&self) -> Option<&Note> {
        self.selection.as_ref().and_then(|id| self.notes.get(id))
    }

    /// Returns the note being edited, if any.
    pub fn editing(&self) -> Option<&Note> {
        self.editing.as_ref().and_then(|id| self.notes.get(id))
    }

    /// Returns the rows currently shown: notes passing the filter, sorted.
    pub fn visible(&self) -> Vec<&Note> {
        self.notes.filter(&self.filter)
    }

    /// Returns the counts for the status line.
    pub fn status(&self) -> Status {
        Status::new(self.notes.len(), self.visible().len())
    }

    // ===========================================
    // Categories and filtering
    // ===========================================

    /// Chooses the category for the next added or edited note.
    pub fn set_input_category(&mut self, name: &str) -> SessionResult<()> {
        let category = self.offered_category(name)?;
        debug!(%category, "input category changed");
        self.input_category = category;
        Ok(())
    }

    /// Restricts the visible rows to one category, or shows all.
    ///
    /// Besides the offered categories, any category already present on a
    /// note can be filtered on.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) -> SessionResult<()> {
        if let CategoryFilter::Only(category) = &filter
            && !self.categories.contains(category)
            && !self.notes.iter().any(|n| n.category() == category)
        {
            return Err(self.unknown_category(category.as_str()));
        }
        debug!(%filter, "category filter changed");
        self.filter.set_category(filter);
        self.selection = None;
        Ok(())
    }

    /// Sets the search text; an empty query shows everything.
    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
        self.selection = None;
    }

    /// Removes both the category restriction and the search text.
    pub fn clear_filter(&mut self) {
        self.filter = NoteFilter::all();
        self.selection = None;
    }

    // ===========================================
    // Selection
    // ===========================================

    /// Selects a visible row (1-based).
    pub fn select(&mut self, row: usize) -> SessionResult<&Note> {
        let visible = self.visible();
        let id = match row.checked_sub(1).and_then(|i| visible.get(i)) {
            Some(note) => note.id().clone(),
            None => {
                return Err(SessionError::RowOutOfRange {
                    row,
                    visible: visible.len(),
                });
            }
        };
        self.select_id(&id)
    }

    /// Selects a visible note by identity.
    pub fn select_id(&mut self, id: &NoteId) -> SessionResult<&Note> {
        if !self.visible().iter().any(|n| n.id() == id) {
            return Err(SessionError::NoteNotFound(id.to_string()));
        }
        self.selection = Some(id.clone());
        self.selected()
            .ok_or_else(|| SessionError::NoteNotFound(id.to_string()))
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // ===========================================
    // Add / delete / edit
    // ===========================================

    /// Adds a note with the current input category, timestamped now.
    pub fn add_note(&mut self, text: &str) -> SessionResult<NoteId> {
        let id = self
            .notes
            .add(text, self.input_category.clone(), Timestamp::now())
            .map_err(|_| SessionError::EmptyText)?;
        self.selection = None;
        info!(%id, category = %self.input_category, "note added");
        Ok(id)
    }

    /// Deletes the selected note.
    ///
    /// With nothing selected this changes nothing and reports
    /// [`SessionError::NothingSelected`].
    pub fn delete_selected(&mut self) -> SessionResult<Note> {
        let id = self.selection.take().ok_or(SessionError::NothingSelected)?;
        let removed = self
            .notes
            .remove(&id)
            .ok_or_else(|| SessionError::NoteNotFound(id.to_string()))?;
        if self.editing.as_ref() == Some(&id) {
            self.editing = None;
        }
        info!(%id, "note deleted");
        Ok(removed)
    }

    /// Starts editing the selected note.
    ///
    /// The input category switches to the note's category; the returned note
    /// holds the text to pre-fill.
    pub fn start_edit(&mut self) -> SessionResult<&Note> {
        let id = self.selection.clone().ok_or(SessionError::NothingSelected)?;
        let category = self
            .notes
            .get(&id)
            .map(|n| n.category().clone())
            .ok_or_else(|| SessionError::NoteNotFound(id.to_string()))?;
        self.input_category = category;
        self.editing = Some(id.clone());
        debug!(%id, "edit started");
        self.editing()
            .ok_or_else(|| SessionError::NoteNotFound(id.to_string()))
    }

    /// Saves the edit in progress with `text` and the current input category.
    ///
    /// Empty text is rejected and the edit stays in progress.
    pub fn save_edit(&mut self, text: &str) -> SessionResult<&Note> {
        let id = self.editing.clone().ok_or(SessionError::NotEditing)?;
        let updated = self
            .notes
            .update(&id, text, self.input_category.clone())
            .map_err(|_| SessionError::EmptyText)?;
        if updated.is_none() {
            self.editing = None;
            return Err(SessionError::NoteNotFound(id.to_string()));
        }
        self.editing = None;
        self.selection = None;
        info!(%id, "note updated");
        self.notes
            .get(&id)
            .ok_or_else(|| SessionError::NoteNotFound(id.to_string()))
    }

    /// Abandons the edit in progress. Returns false if there was none.
    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    // ===========================================
    // Persistence
    // ===========================================

    /// Writes the whole note list to the store.
    ///
    /// On failure the in-memory list is kept as is, so the user can retry.
    pub fn save(&mut self) -> SessionResult<usize> {
        let written = self.store.replace_all(self.notes.as_slice())?;
        info!(count = written, "notes saved");
        Ok(written)
    }

    /// Saves on the way out. A failure is logged, not returned.
    pub fn close(mut self) -> S {
        if let Err(e) = self.save() {
            warn!(error = %e, "could not save notes on exit");
        }
        self.store
    }

    // ===========================================
    // Helpers
    // ===========================================

    fn offered_category(&self, name: &str) -> SessionResult<Category> {
        Category::new(name)
            .ok()
            .filter(|c| self.categories.contains(c))
            .ok_or_else(|| self.unknown_category(name))
    }

    fn unknown_category(&self, name: &str) -> SessionError {
        let known: Vec<_> = self.categories.iter().map(Category::as_str).collect();
        SessionError::UnknownCategory {
            name: name.trim().to_string(),
            known: known.join(", "),
        }
    }
}
