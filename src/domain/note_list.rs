//! In-memory note collection kept sorted by text.

use crate::domain::{Category, Note, NoteFilter, NoteId, ParseNoteError, Timestamp};
use std::collections::BTreeMap;

/// Ordered collection of notes.
///
/// The list is kept sorted case-insensitively by text after every
/// insertion, edit and bulk load. Sorting is stable, so notes with equal
/// text keep their relative order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from existing notes and sorts it.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut list = Self { notes };
        list.sort();
        list
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a note by identity.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns the notes whose ID starts with `prefix`.
    pub fn find_by_id_prefix(&self, prefix: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.id().matches_prefix(prefix))
            .collect()
    }

    /// Adds a new note and re-sorts. Returns the new note's identity.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` for empty text; the list is unchanged.
    pub fn add(
        &mut self,
        text: &str,
        category: Category,
        created: Timestamp,
    ) -> Result<NoteId, ParseNoteError> {
        let note = Note::new(NoteId::new(), text, category, Some(created))?;
        let id = note.id().clone();
        self.insert(note);
        Ok(id)
    }

    /// Inserts an already-built note and re-sorts.
    pub fn insert(&mut self, note: Note) {
        self.notes.push(note);
        self.sort();
    }

    /// Removes the note with the given identity.
    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        let position = self.notes.iter().position(|n| n.id() == id)?;
        Some(self.notes.remove(position))
    }

    /// Updates a note's text and category in place, then re-sorts.
    ///
    /// Returns `Ok(None)` if no note has this identity.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` for empty text; the note is unchanged.
    pub fn update(
        &mut self,
        id: &NoteId,
        text: &str,
        category: Category,
    ) -> Result<Option<&Note>, ParseNoteError> {
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return Ok(None);
        };
        note.set_text(text)?;
        note.set_category(category);
        self.sort();
        Ok(self.notes.iter().find(|n| n.id() == id))
    }

    /// Sorts case-insensitively by text.
    pub fn sort(&mut self) {
        self.notes.sort_by_cached_key(Note::sort_key);
    }

    /// Returns the notes passing the filter, in list order.
    pub fn filter(&self, filter: &NoteFilter) -> Vec<&Note> {
        self.notes.iter().filter(|n| filter.matches(n)).collect()
    }

    /// Counts notes per category.
    pub fn count_by_category(&self) -> BTreeMap<&Category, usize> {
        let mut counts = BTreeMap::new();
        for note in &self.notes {
            *counts.entry(note.category()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
