//! Builder for test notes with sensible defaults.

use jot::domain::{Category, Note, NoteId, Timestamp};

/// Builder for creating test notes with sensible defaults.
///
/// Generates an ID, uses the `Personal` category and a fixed timestamp.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    text: String,
    category: Category,
    created: Option<Timestamp>,
}

impl TestNote {
    /// Creates a new test note with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            text: text.into(),
            category: Category::new("Personal").expect("Invalid category"),
            created: Some("2024-01-15 10:30:00".parse().expect("Invalid timestamp")),
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Sets the category.
    pub fn category(mut self, name: &str) -> Self {
        self.category = Category::new(name).expect("Invalid category");
        self
    }

    /// Sets the creation time (`YYYY-MM-DD HH:MM:SS`).
    pub fn created(mut self, ts: &str) -> Self {
        self.created = Some(ts.parse().expect("Invalid timestamp"));
        self
    }

    /// Leaves the creation time empty.
    pub fn without_created(mut self) -> Self {
        self.created = None;
        self
    }

    /// Returns the 10-character ID prefix.
    pub fn id_prefix(&self) -> String {
        self.id.prefix()
    }

    /// Returns the ID.
    pub fn note_id(&self) -> &NoteId {
        &self.id
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::new(
            self.id.clone(),
            &self.text,
            self.category.clone(),
            self.created,
        )
        .expect("TestNote should always produce valid Note")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Buy milk").to_note();
        assert_eq!(note.text(), "Buy milk");
        assert_eq!(note.category().as_str(), "Personal");
        assert_eq!(
            note.created().map(|ts| ts.to_string()).as_deref(),
            Some("2024-01-15 10:30:00")
        );
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Standup")
            .id("01HQ3K5M7NXJK4QZPW8V2R6T9Y")
            .category("Work")
            .without_created();

        assert_eq!(note.id_prefix(), "01HQ3K5M7N");
        let domain_note = note.to_note();
        assert_eq!(domain_note.category().as_str(), "Work");
        assert!(domain_note.created().is_none());
    }
}
