//! Add note command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{note_number, open_session};
use crate::cli::AddArgs;
use crate::domain::NoteDraft;

/// Builds the dialog draft from `add` arguments (pure function, no I/O).
pub fn draft_from_args(args: &AddArgs) -> NoteDraft {
    NoteDraft::new()
        .title(&args.title)
        .url(&args.url)
        .notes(&args.notes)
        .with_category(&args.category)
}

pub fn handle_add(args: &AddArgs, notes_file: &Path) -> Result<()> {
    let mut session = open_session(notes_file)?;

    *session.open_new() = draft_from_args(args);

    // Starring a new note saves it first, so the save below edits it in place
    if args.favorite {
        session
            .toggle_favorite()
            .with_context(|| "failed to mark note as favorite")?;
    }

    let key = session
        .save()
        .with_context(|| format!("failed to save note to {}", notes_file.display()))?;

    let store = session.store();
    if let Some(record) = store.get(key) {
        let star = if record.is_favorite() { " *" } else { "" };
        println!("Added: {} [{}]{}", record, note_number(store, key), star);
        if let Some(color) = store.category_color(record.category()) {
            println!("  color: {}", color);
        }
    }
    Ok(())
}
