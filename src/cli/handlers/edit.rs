//! Edit command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{note_number, open_session, require_note};
use crate::cli::EditArgs;
use crate::domain::NoteDraft;

/// Overwrites the draft fields given on the command line.
///
/// Returns true if any field was given.
pub fn apply_edits(draft: &mut NoteDraft, args: &EditArgs) -> bool {
    let mut changed = false;
    if let Some(title) = &args.title {
        draft.title = title.clone();
        changed = true;
    }
    if let Some(url) = &args.url {
        draft.url = url.clone();
        changed = true;
    }
    if let Some(notes) = &args.notes {
        draft.notes = notes.clone();
        changed = true;
    }
    if let Some(category) = &args.category {
        draft.category = category.clone();
        changed = true;
    }
    changed
}

pub fn handle_edit(args: &EditArgs, notes_file: &Path) -> Result<()> {
    let mut session = open_session(notes_file)?;
    let key = require_note(&session, &args.note)?;

    let draft = session.open_existing(key)?;
    if !apply_edits(draft, args) {
        session.cancel();
        anyhow::bail!("nothing to change: pass --title, --url, --notes, or --category");
    }

    session
        .save()
        .with_context(|| format!("failed to save note to {}", notes_file.display()))?;

    let store = session.store();
    if let Some(record) = store.get(key) {
        println!("Updated: {} [{}]", record, note_number(store, key));
    }
    Ok(())
}
