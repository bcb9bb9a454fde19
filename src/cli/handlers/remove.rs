//! Remove command handler.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use super::{apply_filters, confirm, open_session, select_note};
use crate::cli::RmArgs;
use crate::cli::config::Config;

pub fn handle_remove(args: &RmArgs, db_path: &Path, config: &Config) -> Result<()> {
    let mut session = open_session(db_path, config)?;
    apply_filters(&mut session, &args.filter)?;
    select_note(&mut session, &args.note, &mut io::stderr())?;

    if !args.yes {
        let prompt = match session.selected() {
            Some(note) => format!("Delete {}?", note),
            None => "Delete this note?".to_string(),
        };
        let confirmed = confirm(&prompt, &mut io::stdin().lock(), &mut io::stderr())
            .with_context(|| "failed to read confirmation")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = session.delete_selected()?;
    session
        .save()
        .with_context(|| format!("failed to save notes to {}", db_path.display()))?;

    println!("Deleted: {} [{}]", removed, removed.id().prefix());
    println!("{}", session.status());
    Ok(())
}
