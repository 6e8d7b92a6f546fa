//! List command handler.

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use super::{note_number, open_session, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::NoteRecord;
use crate::store::{ColorSource, NoteKey, NoteStore, ViewMode};

pub fn handle_list(args: &ListArgs, notes_file: &Path) -> Result<()> {
    let mut session = open_session(notes_file)?;
    if args.favorites {
        session.toggle_favorites_view();
    }

    let notes = session.visible();
    let empty_message = match session.view() {
        ViewMode::All => "No notes found.",
        ViewMode::Favorites => "No favorite notes.",
    };
    print_notes(session.store(), &notes, args.format, empty_message)
}

/// Prints a note listing in the requested format.
pub(crate) fn print_notes<C: ColorSource>(
    store: &NoteStore<C>,
    notes: &[(NoteKey, &NoteRecord)],
    format: OutputFormat,
    empty_message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("{}", empty_message);
            } else {
                print!("{}", render_listing(store, notes));
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .map(|(key, record)| NoteListing::new(note_number(store, *key), record))
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Column rule printed under the listing header.
const DIVIDER: &str = "---  -  ------------------------------  ---------------  -------";

/// Renders notes as a table: number, favorite star, title, category, preview.
pub(crate) fn render_listing<C: ColorSource>(
    store: &NoteStore<C>,
    notes: &[(NoteKey, &NoteRecord)],
) -> String {
    let mut out = String::new();
    push_row(&mut out, "#", "", "Title", "Category", "Preview");
    let _ = writeln!(out, "{}", DIVIDER);

    for (key, record) in notes {
        let star = if record.is_favorite() { "*" } else { " " };
        push_row(
            &mut out,
            &note_number(store, *key).to_string(),
            star,
            &truncate_str(record.title(), 30),
            &truncate_str(record.category().as_str(), 15),
            &record.preview(),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} note(s)", notes.len());
    out
}

fn push_row(out: &mut String, num: &str, star: &str, title: &str, cat: &str, preview: &str) {
    let _ = writeln!(out, "{num:>3}  {star:1}  {title:<30}  {cat:<15}  {preview}");
}
