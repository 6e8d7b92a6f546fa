//! Delete command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_session, require_note};
use crate::cli::DeleteArgs;

pub fn handle_delete(args: &DeleteArgs, notes_file: &Path) -> Result<()> {
    let mut session = open_session(notes_file)?;
    let key = require_note(&session, &args.note)?;

    session.open_existing(key)?;
    let removed = session
        .delete()
        .with_context(|| format!("failed to delete note from {}", notes_file.display()))?;

    println!("Deleted: {}", removed);
    Ok(())
}
