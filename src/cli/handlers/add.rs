//! Add command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_session;
use crate::cli::AddArgs;
use crate::cli::config::Config;

pub fn handle_add(args: &AddArgs, db_path: &Path, config: &Config) -> Result<()> {
    let mut session = open_session(db_path, config)?;

    if let Some(category) = &args.category {
        session.set_input_category(category)?;
    }

    let id = session.add_note(&args.text)?;
    session
        .save()
        .with_context(|| format!("failed to save notes to {}", db_path.display()))?;

    if let Some(note) = session.notes().get(&id) {
        println!("Added: {} [{}]", note, id.prefix());
    }
    println!("{}", session.status());
    Ok(())
}
