//! Visible-note filtering: search text and the favorites view.

use crate::domain::NoteRecord;
use crate::store::colors::ColorSource;
use crate::store::note_store::{NoteKey, NoteStore};

/// Which notes the listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    All,
    Favorites,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::All => ViewMode::Favorites,
            ViewMode::Favorites => ViewMode::All,
        }
    }
}

/// Notes whose title, category, or body contains `query`, ignoring case.
///
/// An empty query matches every note. Results keep list order.
pub fn search<'a, C: ColorSource>(
    store: &'a NoteStore<C>,
    query: &str,
) -> Vec<(NoteKey, &'a NoteRecord)> {
    let needle = query.to_lowercase();
    store
        .iter()
        .filter(|(_, record)| needle.is_empty() || record.matches_lowercase(&needle))
        .collect()
}

/// Notes marked as favorite, in list order.
pub fn favorites<C: ColorSource>(store: &NoteStore<C>) -> Vec<(NoteKey, &NoteRecord)> {
    store
        .iter()
        .filter(|(_, record)| record.is_favorite())
        .collect()
}

/// The notes shown for a view mode.
///
/// The favorites view ignores the search query; the two filters are never
/// combined.
pub fn visible<'a, C: ColorSource>(
    store: &'a NoteStore<C>,
    mode: ViewMode,
    query: &str,
) -> Vec<(NoteKey, &'a NoteRecord)> {
    match mode {
        ViewMode::All => search(store, query),
        ViewMode::Favorites => favorites(store),
    }
}
