//! Command handlers for the CLI.

mod add;
mod categories;
mod completions;
mod edit;
mod list;
mod remove;
mod resolve;
mod shell;


use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::FilterArgs;
use super::config::Config;
use crate::domain::{Category, CategoryFilter};
use crate::session::Session;
use crate::store::{NoteStore, SqliteStore};

// Re-export public items
pub use add::handle_add;
pub use categories::handle_categories;
pub use completions::handle_completions;
pub use edit::handle_edit;
pub use list::handle_list;
pub use remove::handle_remove;
pub use resolve::{ResolveResult, resolve_note, select_note};
pub use shell::{handle_shell, run_shell};

// Re-export for tests
#[cfg(test)]
pub(crate) use categories::category_listings;
#[cfg(test)]
pub(crate) use list::{write_listing, write_rows};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the database and loads a session with the configured categories.
pub(crate) fn open_session(db_path: &Path, config: &Config) -> Result<Session<SqliteStore>> {
    let store = SqliteStore::open(db_path)
        .and_then(|s| s.with_busy_timeout(config.busy_timeout()))
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    Session::load(store, config.categories(), config.default_category())
        .with_context(|| format!("failed to load notes from {}", db_path.display()))
}

/// Applies `-c/--category` and `-q/--query` to the session's view.
pub(crate) fn apply_filters<S: NoteStore>(
    session: &mut Session<S>,
    filter: &FilterArgs,
) -> Result<()> {
    if let Some(name) = &filter.category {
        let category =
            Category::new(name).with_context(|| format!("invalid category: {}", name))?;
        session.set_category_filter(CategoryFilter::Only(category))?;
    }
    if let Some(query) = &filter.query {
        session.set_query(query);
    }
    Ok(())
}

/// Parses a shell-style category filter argument: `all` or a category name.
pub(crate) fn parse_category_filter(arg: &str) -> Result<CategoryFilter> {
    let arg = arg.trim();
    if arg.is_empty() {
        bail!("expected a category name or 'all'");
    }
    if arg.eq_ignore_ascii_case("all") {
        return Ok(CategoryFilter::All);
    }
    let category = Category::new(arg).with_context(|| format!("invalid category: {}", arg))?;
    Ok(CategoryFilter::Only(category))
}

/// Asks a yes/no question. Anything but `y`/`yes` (or end of input) is no.
pub(crate) fn confirm<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    write!(out, "{} [y/N] ", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
