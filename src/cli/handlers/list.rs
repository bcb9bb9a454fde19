//! List command handler.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use super::{apply_filters, open_session};
use crate::cli::ListArgs;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::Note;
use crate::session::Session;
use crate::store::NoteStore;

pub fn handle_list(args: &ListArgs, db_path: &Path, config: &Config) -> Result<()> {
    let mut session = open_session(db_path, config)?;
    apply_filters(&mut session, &args.filter)?;

    match args.format {
        OutputFormat::Human => {
            let stdout = io::stdout();
            write_listing(&mut stdout.lock(), &session)?;
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = session
                .visible()
                .into_iter()
                .enumerate()
                .map(|(i, n)| NoteListing::new(i + 1, n))
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Writes the visible rows followed by the status line.
pub(crate) fn write_listing<S: NoteStore, W: Write>(
    out: &mut W,
    session: &Session<S>,
) -> io::Result<()> {
    let visible = session.visible();
    if visible.is_empty() {
        writeln!(out, "No notes found.")?;
    } else {
        write_rows(out, &visible)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", session.status())
}

/// Writes numbered rows: row, ID prefix, and `[category] text - created`.
pub(crate) fn write_rows<W: Write>(out: &mut W, notes: &[&Note]) -> io::Result<()> {
    let width = notes.len().to_string().len().max(2);
    writeln!(out, "{:>width$}  {:<10}  {}", "#", "ID", "Note")?;
    writeln!(out, "{:>width$}  {:<10}  {}", "-".repeat(width), "-".repeat(10), "----")?;
    for (i, note) in notes.iter().enumerate() {
        writeln!(out, "{:>width$}  {:<10}  {}", i + 1, note.id().prefix(), note)?;
    }
    Ok(())
}
