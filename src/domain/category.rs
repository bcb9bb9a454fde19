//! Category label attached to every note.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories offered when no configuration overrides them.
pub const DEFAULT_CATEGORIES: &[&str] = &["Personal", "Work", "School", "Other"];

/// Category given to stored notes that carry none.
pub const FALLBACK_CATEGORY: &str = "General";

/// A category label for grouping notes.
///
/// Categories are flat labels chosen from a configured list. Unlike tags
/// they keep their case: `Work` and `work` are different categories.
///
/// # Validation Rules
/// - Non-empty after trimming surrounding whitespace
/// - No control characters
///
/// # Examples
///
/// ```
/// use jot::domain::Category;
///
/// let category = Category::new("  Work ").unwrap();
/// assert_eq!(category.as_str(), "Work");
/// assert_ne!(category, Category::new("work").unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

/// Error returned when parsing an invalid category.
#[derive(Debug, Clone)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl Category {
    /// Creates a new Category from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseCategoryError` if the category is empty, whitespace-only,
    /// or contains control characters.
    pub fn new(s: &str) -> Result<Self, ParseCategoryError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseCategoryError("category cannot be empty".to_string()));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(ParseCategoryError(format!(
                "invalid category '{}': control characters are not allowed",
                trimmed.escape_debug()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The category used for records stored without one.
    pub fn fallback() -> Self {
        Self(FALLBACK_CATEGORY.to_string())
    }

    /// The built-in category list.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|c| Self((*c).to_string()))
            .collect()
    }

    /// Returns the category as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category(\"{}\")", self.0)
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
