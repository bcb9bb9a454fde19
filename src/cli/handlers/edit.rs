//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::io;
use std::path::Path;

use super::{apply_filters, open_session, select_note};
use crate::cli::EditArgs;
use crate::cli::config::Config;

pub fn handle_edit(args: &EditArgs, db_path: &Path, config: &Config) -> Result<()> {
    if args.text.is_none() && args.set_category.is_none() {
        bail!("nothing to change: pass --text and/or --set-category");
    }

    let mut session = open_session(db_path, config)?;
    apply_filters(&mut session, &args.filter)?;
    select_note(&mut session, &args.note, &mut io::stderr())?;

    let draft = session.start_edit()?.text().to_string();
    if let Some(category) = &args.set_category {
        session.set_input_category(category)?;
    }
    let text = args.text.as_deref().unwrap_or(&draft);

    let updated = session.save_edit(text)?;
    let line = format!("Updated: {} [{}]", updated, updated.id().prefix());

    session
        .save()
        .with_context(|| format!("failed to save notes to {}", db_path.display()))?;

    println!("{}", line);
    Ok(())
}
