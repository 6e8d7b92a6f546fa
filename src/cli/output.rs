//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Category, NoteRecord, Rgba};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
///
/// `number` is the note's 1-based position in the full list, which is what
/// other commands accept to name it.
#[derive(Debug, Serialize)]
pub struct NoteListing<'a> {
    pub number: usize,
    pub title: &'a str,
    pub category: &'a Category,
    pub url: &'a str,
    pub preview: String,
    pub color: Rgba,
    pub favorite: bool,
}

impl<'a> NoteListing<'a> {
    pub fn new(number: usize, record: &'a NoteRecord) -> Self {
        Self {
            number,
            title: record.title(),
            category: record.category(),
            url: record.url(),
            preview: record.preview(),
            color: record.color(),
            favorite: record.is_favorite(),
        }
    }
}

/// A category with its color and note count.
#[derive(Debug, Serialize)]
pub struct CategoryListing<'a> {
    pub name: &'a Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    pub count: usize,
}
