//! Search command handler.

use anyhow::Result;
use std::path::Path;

use super::list::print_notes;
use super::open_session;
use crate::cli::SearchArgs;

pub fn handle_search(args: &SearchArgs, notes_file: &Path) -> Result<()> {
    let mut session = open_session(notes_file)?;
    session.set_search(args.query.as_str());

    let results = session.visible();
    tracing::debug!(query = %args.query, matches = results.len(), "searched notes");
    print_notes(
        session.store(),
        &results,
        args.format,
        "No matching notes found.",
    )
}
