//! Categories command handler.

use anyhow::Result;
use std::path::Path;

use super::open_session;
use crate::cli::CategoriesArgs;
use crate::cli::config::Config;
use crate::cli::output::{CategoryListing, Output, OutputFormat};
use crate::domain::Category;
use crate::session::Session;
use crate::store::NoteStore;

pub fn handle_categories(args: &CategoriesArgs, db_path: &Path, config: &Config) -> Result<()> {
    let session = open_session(db_path, config)?;
    let listings = category_listings(&session, args.counts);

    match args.format {
        OutputFormat::Human => {
            let default = session.input_category();
            for listing in &listings {
                let marker = if &listing.name == default { " (default)" } else { "" };
                match listing.count {
                    Some(count) => println!("{:<20} {:>5}{}", listing.name, count, marker),
                    None => println!("{}{}", listing.name, marker),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}

/// Offered categories first, then any other category found on stored notes.
pub(crate) fn category_listings<S: NoteStore>(
    session: &Session<S>,
    with_counts: bool,
) -> Vec<CategoryListing> {
    let counts = session.notes().count_by_category();
    let mut names: Vec<Category> = session.categories().to_vec();
    for category in counts.keys() {
        if !names.contains(category) {
            names.push((*category).clone());
        }
    }

    names
        .into_iter()
        .map(|name| {
            let count = with_counts.then(|| counts.get(&name).copied().unwrap_or(0));
            CategoryListing { name, count }
        })
        .collect()
}
