//! Category and text filter applied to the note list.

use crate::domain::{Category, Note};
use std::fmt;

/// Which categories a filter lets through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Only notes filed under this category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if a note in `category` passes the filter.
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Filter combining a category restriction and a text query.
///
/// The query is trimmed and lower-cased once; matching is a
/// case-insensitive substring test on the note text. An empty query
/// matches every note.
///
/// ```
/// use jot::domain::{Category, CategoryFilter, NoteFilter};
///
/// let filter = NoteFilter::new(CategoryFilter::All, "  MiLk ");
/// assert_eq!(filter.query(), "milk");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    category: CategoryFilter,
    query: String,
}

impl NoteFilter {
    pub fn new(category: CategoryFilter, query: &str) -> Self {
        Self {
            category,
            query: normalize_query(query),
        }
    }

    /// A filter that lets everything through.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = normalize_query(query);
    }

    /// Returns true if nothing is filtered out.
    pub fn is_unrestricted(&self) -> bool {
        self.category == CategoryFilter::All && self.query.is_empty()
    }

    /// Returns true if the note passes both the category and the text test.
    pub fn matches(&self, note: &Note) -> bool {
        self.category.matches(note.category())
            && (self.query.is_empty() || note.text().to_lowercase().contains(&self.query))
    }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
