//! Command handlers for the CLI.

mod add;
mod categories;
mod completions;
mod delete;
mod edit;
mod favorite;
mod list;
mod resolve;
mod search;
mod show_open;


use anyhow::{Context, Result};
use std::path::Path;

use crate::infra::JsonFile;
use crate::store::{NoteKey, NoteStore, Session};

// Re-export public items
pub use add::{draft_from_args, handle_add};
pub use categories::handle_categories;
pub use completions::handle_completions;
pub use delete::handle_delete;
pub use edit::{apply_edits, handle_edit};
pub use favorite::handle_favorite;
pub use list::handle_list;
pub use resolve::{ResolveResult, resolve_note};
pub use search::handle_search;
pub use show_open::{handle_open, handle_show};

// Re-export for tests
#[cfg(test)]
pub(crate) use list::render_listing;
#[cfg(test)]
pub(crate) use show_open::{handle_open_impl, render_note};

// ===========================================
// Shared Utilities
// ===========================================

/// Loads the notes file into a session, creating the file if missing.
pub(crate) fn open_session(notes_file: &Path) -> Result<Session<JsonFile>> {
    Session::open(JsonFile::new(notes_file))
        .with_context(|| format!("failed to load notes from {}", notes_file.display()))
}

/// Resolves `identifier` to a note key, failing on no match or ambiguity.
pub(crate) fn require_note(session: &Session<JsonFile>, identifier: &str) -> Result<NoteKey> {
    match resolve_note(session.store(), identifier) {
        ResolveResult::Unique(key) => Ok(key),
        ResolveResult::Ambiguous(keys) => {
            resolve::print_ambiguous_notes(session.store(), identifier, &keys);
            anyhow::bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => anyhow::bail!("note not found: '{}'", identifier),
    }
}

/// The 1-based number the CLI uses to name a note.
pub(crate) fn note_number<C: crate::store::ColorSource>(
    store: &NoteStore<C>,
    key: NoteKey,
) -> usize {
    store.position(key).map_or(0, |i| i + 1)
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
