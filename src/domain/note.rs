//! Note record: text, category and creation time.

use crate::domain::{Category, NoteId, Timestamp};
use std::fmt;

/// The kind of error that occurred when constructing or editing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyText,
}

/// Error returned when a note would end up with no text.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl ParseNoteError {
    fn empty_text() -> Self {
        Self {
            kind: ParseNoteErrorKind::EmptyText,
        }
    }
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyText => write!(f, "invalid note: text cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A short text note filed under a category.
///
/// # Required Fields
/// - `id`: stable identity, unaffected by sorting or editing
/// - `text`: trimmed, non-empty
/// - `category`: the category the note is filed under
///
/// # Optional Fields
/// - `created`: when the note was written. Notes imported from older stores
///   may lack it.
///
/// # Examples
///
/// ```
/// use jot::domain::{Category, Note, NoteId, Timestamp};
///
/// let note = Note::new(
///     NoteId::new(),
///     "  buy milk ",
///     Category::new("Personal").unwrap(),
///     Some(Timestamp::now()),
/// )
/// .unwrap();
/// assert_eq!(note.text(), "buy milk");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    text: String,
    category: Category,
    created: Option<Timestamp>,
}

impl Note {
    /// Creates a new Note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the text is empty or whitespace-only.
    pub fn new(
        id: NoteId,
        text: impl Into<String>,
        category: Category,
        created: Option<Timestamp>,
    ) -> Result<Self, ParseNoteError> {
        let text = normalize_text(text.into())?;
        Ok(Self {
            id,
            text,
            category,
            created,
        })
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the note's category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns when the note was created, if known.
    pub fn created(&self) -> Option<Timestamp> {
        self.created
    }

    /// Replaces the note's text, keeping identity and creation time.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the new text is empty; the note is unchanged.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ParseNoteError> {
        self.text = normalize_text(text.into())?;
        Ok(())
    }

    /// Moves the note to another category.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Sort key: the text, lower-cased.
    pub(crate) fn sort_key(&self) -> String {
        self.text.to_lowercase()
    }
}

fn normalize_text(text: String) -> Result<String, ParseNoteError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseNoteError::empty_text());
    }
    if trimmed.len() == text.len() {
        Ok(text)
    } else {
        Ok(trimmed.to_string())
    }
}

impl fmt::Display for Note {
    /// Renders the list row: `[category] text - created`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.created {
            Some(created) => write!(f, "[{}] {} - {}", self.category, self.text, created),
            None => write!(f, "[{}] {} - ", self.category, self.text),
        }
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("category", &self.category)
            .field("created", &self.created)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn work() -> Category {
        Category::new("Work").unwrap()
    }

    fn ts() -> Timestamp {
        "2024-01-15 10:30:00".parse().unwrap()
    }

    #[test]
    fn new_trims_text() {
        let note = Note::new(NoteId::new(), "  call Ana  ", work(), Some(ts())).unwrap();
        assert_eq!(note.text(), "call Ana");
    }

    #[test]
    fn new_rejects_empty_text() {
        assert!(Note::new(NoteId::new(), "", work(), None).is_err());
        assert!(Note::new(NoteId::new(), " \t\n", work(), None).is_err());
    }

    #[test]
    fn empty_text_error_message() {
        let err = Note::new(NoteId::new(), "  ", work(), None).unwrap_err();
        assert_eq!(err.to_string(), "invalid note: text cannot be empty");
    }

    #[test]
    fn set_text_keeps_identity_and_timestamp() {
        let id = NoteId::new();
        let mut note = Note::new(id.clone(), "draft", work(), Some(ts())).unwrap();
        note.set_text(" final ").unwrap();
        assert_eq!(note.text(), "final");
        assert_eq!(note.id(), &id);
        assert_eq!(note.created(), Some(ts()));
    }

    #[test]
    fn set_text_rejects_empty_and_leaves_note_unchanged() {
        let mut note = Note::new(NoteId::new(), "keep me", work(), None).unwrap();
        assert!(note.set_text("   ").is_err());
        assert_eq!(note.text(), "keep me");
    }

    #[test]
    fn set_category_changes_category() {
        let mut note = Note::new(NoteId::new(), "x", work(), None).unwrap();
        note.set_category(Category::new("Personal").unwrap());
        assert_eq!(note.category().as_str(), "Personal");
    }

    #[test]
    fn display_renders_list_row() {
        let note = Note::new(NoteId::new(), "buy milk", work(), Some(ts())).unwrap();
        assert_eq!(note.to_string(), "[Work] buy milk - 2024-01-15 10:30:00");
    }

    #[test]
    fn display_without_timestamp() {
        let note = Note::new(NoteId::new(), "buy milk", work(), None).unwrap();
        assert_eq!(note.to_string(), "[Work] buy milk - ");
    }

    #[test]
    fn sort_key_is_lowercase_text() {
        let note = Note::new(NoteId::new(), "Buy MILK", work(), None).unwrap();
        assert_eq!(note.sort_key(), "buy milk");
    }
}
