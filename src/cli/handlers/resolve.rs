//! Note resolution utilities.

use crate::store::{ColorSource, NoteKey, NoteStore};

/// Result of resolving a note identifier.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(NoteKey),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<NoteKey>),
    /// No notes matched.
    NotFound,
}

/// Prints the competing notes so the user can pick one by number.
pub(crate) fn print_ambiguous_notes<C: ColorSource>(
    store: &NoteStore<C>,
    identifier: &str,
    keys: &[NoteKey],
) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, keys.len());
    for &key in keys {
        let Some(record) = store.get(key) else {
            continue;
        };
        let number = super::note_number(store, key);
        eprintln!("  {:>3}  {}", number, record);
        if !record.notes().is_empty() {
            eprintln!("       {}", record.preview());
        }
    }
    eprintln!();
    eprintln!("Use the note number to specify which note you mean.");
}

/// Resolves a note identifier to a unique note.
///
/// Resolution order:
/// 1. List number (1-based, as printed by `ls`)
/// 2. Exact title match, ignoring case
///
/// Returns `Unique` if exactly one note matches, `Ambiguous` if several
/// notes share the title, or `NotFound` if nothing matches.
pub fn resolve_note<C: ColorSource>(store: &NoteStore<C>, identifier: &str) -> ResolveResult {
    let identifier = identifier.trim();

    // A number in range is the most precise reference
    let by_number = identifier
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| store.key_at(i));
    if let Some(key) = by_number {
        return ResolveResult::Unique(key);
    }

    let wanted = identifier.to_lowercase();
    let mut candidates: Vec<NoteKey> = store
        .iter()
        .filter(|(_, record)| record.title().to_lowercase() == wanted)
        .map(|(key, _)| key)
        .collect();

    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates.remove(0)),
        _ => ResolveResult::Ambiguous(candidates),
    }
}
