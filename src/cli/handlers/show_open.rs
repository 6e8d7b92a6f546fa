//! Show and Open command handlers.

use anyhow::{Result, bail};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

use super::{note_number, open_session, require_note};
use crate::cli::browser::{SystemBrowser, UrlOpener};
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{OpenArgs, ShowArgs};
use crate::domain::NoteRecord;

/// A note with its full body, for `show --format json`.
#[derive(Debug, Serialize)]
struct NoteDetail<'a> {
    #[serde(flatten)]
    listing: NoteListing<'a>,
    notes: &'a str,
}

pub fn handle_show(args: &ShowArgs, notes_file: &Path) -> Result<()> {
    let session = open_session(notes_file)?;
    let key = require_note(&session, &args.note)?;
    let store = session.store();
    let Some(record) = store.get(key) else {
        bail!("note not found: '{}'", args.note);
    };
    let number = note_number(store, key);

    match args.format {
        OutputFormat::Human => print!("{}", render_note(number, record)),
        OutputFormat::Json => {
            let detail = NoteDetail {
                listing: NoteListing::new(number, record),
                notes: record.notes(),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(detail))?);
        }
    }
    Ok(())
}

/// Renders a full note for terminal display.
pub(crate) fn render_note(number: usize, record: &NoteRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", record.title());
    let _ = writeln!(out);

    let star = if record.is_favorite() {
        "  *favorite*"
    } else {
        ""
    };
    let _ = writeln!(out, "Number: {}{}", number, star);
    if !record.category().is_empty() {
        let _ = writeln!(out, "Category: {}  {}", record.category(), record.color());
    }
    if !record.url().is_empty() {
        let _ = writeln!(out, "URL: {}", record.url());
    }

    if !record.notes().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", record.notes());
    }
    out
}

/// Internal implementation that accepts a generic URL opener.
pub(crate) fn handle_open_impl<O: UrlOpener>(
    args: &OpenArgs,
    notes_file: &Path,
    opener: &O,
) -> Result<()> {
    let session = open_session(notes_file)?;
    let key = require_note(&session, &args.note)?;
    let Some(record) = session.store().get(key) else {
        bail!("note not found: '{}'", args.note);
    };

    if record.url().is_empty() {
        bail!("note '{}' has no URL", record.title());
    }

    opener.open(record.url())?;
    println!("Opening: {}", record.url());
    Ok(())
}

pub fn handle_open(args: &OpenArgs, notes_file: &Path, config: &Config) -> Result<()> {
    handle_open_impl(args, notes_file, &SystemBrowser::new(config.browser()))
}
