//! Categories command handler.

use anyhow::Result;
use std::path::Path;

use super::open_session;
use crate::cli::CategoriesArgs;
use crate::cli::output::{CategoryListing, Output, OutputFormat};
use crate::domain::Category;
use crate::store::{ColorSource, NoteStore};

pub fn handle_categories(args: &CategoriesArgs, notes_file: &Path) -> Result<()> {
    let session = open_session(notes_file)?;
    let store = session.store();

    let partial = args.partial.as_deref().unwrap_or("");
    let categories = store.suggest_categories(partial);
    let listings = category_listings(store, &categories);

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No categories found.");
            } else {
                for listing in &listings {
                    let color = listing
                        .color
                        .map_or_else(|| "-------".to_string(), |c| c.to_hex());
                    let name = if listing.name.is_empty() {
                        "(none)"
                    } else {
                        listing.name.as_str()
                    };
                    println!("{}  {} ({})", color, name, listing.count);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

/// Pairs each category with its color and the number of notes using it.
pub(crate) fn category_listings<'a, C: ColorSource>(
    store: &NoteStore<C>,
    categories: &[&'a Category],
) -> Vec<CategoryListing<'a>> {
    categories
        .iter()
        .map(|&name| CategoryListing {
            name,
            color: store.category_color(name),
            count: store.iter().filter(|(_, r)| r.category() == name).count(),
        })
        .collect()
}
