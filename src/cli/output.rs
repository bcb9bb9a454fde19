//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Category, Note};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub row: usize,
    pub id: String,
    pub text: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl NoteListing {
    pub fn new(row: usize, note: &Note) -> Self {
        Self {
            row,
            id: note.id().to_string(),
            text: note.text().to_string(),
            category: note.category().clone(),
            created: note.created().map(|ts| ts.to_string()),
        }
    }
}

/// A category with optional count.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub name: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}
