//! Favorite toggle command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_session, require_note};
use crate::cli::FavoriteArgs;

pub fn handle_favorite(args: &FavoriteArgs, notes_file: &Path) -> Result<()> {
    let mut session = open_session(notes_file)?;
    let key = require_note(&session, &args.note)?;

    session.open_existing(key)?;
    let favorite = session
        .toggle_favorite()
        .with_context(|| format!("failed to update note in {}", notes_file.display()))?;
    session.cancel();

    if let Some(record) = session.store().get(key) {
        let verb = if favorite { "Favorited" } else { "Unfavorited" };
        println!("{}: {}", verb, record);
    }
    Ok(())
}
