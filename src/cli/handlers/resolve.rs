//! Note resolution utilities.

use anyhow::{Result, bail};
use std::io::{self, Write};

use super::truncate_str;
use crate::domain::{Note, NoteId};
use crate::session::Session;
use crate::store::NoteStore;

/// Result of resolving a note identifier.
#[derive(Debug, PartialEq)]
pub enum ResolveResult {
    /// A row number of the visible list (1-based).
    Row(usize),
    /// Exactly one note matched.
    Unique(NoteId),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<Note>),
    /// No notes matched.
    NotFound,
}

/// Writes the candidates of an ambiguous identifier to help pick one.
pub(crate) fn write_ambiguous_notes<W: Write>(
    out: &mut W,
    identifier: &str,
    notes: &[Note],
) -> io::Result<()> {
    writeln!(out, "Ambiguous: '{}' matches {} notes:", identifier, notes.len())?;
    for note in notes {
        writeln!(
            out,
            "  {} - {}",
            note.id().prefix(),
            truncate_str(&note.to_string(), 70)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Use the row number or a longer ID prefix.")
}

/// Resolves a note identifier against the visible rows.
///
/// Resolution order:
/// 1. Row number (all digits)
/// 2. ID prefix match (if input looks like a ULID prefix)
/// 3. Exact text match (case-insensitive)
pub fn resolve_note<S: NoteStore>(session: &Session<S>, identifier: &str) -> ResolveResult {
    let identifier = identifier.trim();

    if !identifier.is_empty()
        && identifier.chars().all(|c| c.is_ascii_digit())
        && let Ok(row) = identifier.parse()
    {
        return ResolveResult::Row(row);
    }

    let visible = session.visible();

    let looks_like_id =
        identifier.len() >= 4 && identifier.chars().all(|c| c.is_ascii_alphanumeric());
    if looks_like_id {
        let id_matches: Vec<&Note> = visible
            .iter()
            .copied()
            .filter(|n| n.id().matches_prefix(identifier))
            .collect();
        match id_matches.as_slice() {
            [only] => return ResolveResult::Unique(only.id().clone()),
            [] => {}
            many => return ResolveResult::Ambiguous(many.iter().map(|n| (*n).clone()).collect()),
        }
    }

    let lowered = identifier.to_lowercase();
    let text_matches: Vec<&Note> = visible
        .iter()
        .copied()
        .filter(|n| n.text().to_lowercase() == lowered)
        .collect();

    match text_matches.as_slice() {
        [] => ResolveResult::NotFound,
        [only] => ResolveResult::Unique(only.id().clone()),
        many => ResolveResult::Ambiguous(many.iter().map(|n| (*n).clone()).collect()),
    }
}

/// Resolves `identifier` and selects the note in the session.
///
/// Candidates of an ambiguous identifier are listed on `out`.
pub fn select_note<S: NoteStore, W: Write>(
    session: &mut Session<S>,
    identifier: &str,
    out: &mut W,
) -> Result<()> {
    match resolve_note(session, identifier) {
        ResolveResult::Row(row) => {
            session.select(row)?;
        }
        ResolveResult::Unique(id) => {
            session.select_id(&id)?;
        }
        ResolveResult::Ambiguous(notes) => {
            write_ambiguous_notes(out, identifier, &notes)?;
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => {
            bail!("note not found: '{}'", identifier);
        }
    }
    Ok(())
}
