//! Core types: Note, NoteId (ULID), Category, Timestamp, NoteList, NoteFilter

mod category;
mod filter;
mod note;
mod note_id;
mod note_list;
mod timestamp;

pub use category::{Category, DEFAULT_CATEGORIES, FALLBACK_CATEGORY, ParseCategoryError};
pub use filter::{CategoryFilter, NoteFilter};
pub use note::{Note, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use note_list::NoteList;
pub use timestamp::{ParseTimestampError, TIMESTAMP_FORMAT, Timestamp};
