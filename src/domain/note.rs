//! Note records and the editable draft used to create or update them.

use crate::domain::{Category, Rgba};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of body characters shown in a note preview.
const PREVIEW_CHARS: usize = 50;

/// Preview shown for a note with an empty body.
const EMPTY_PREVIEW: &str = "No content available";

/// A saved note.
///
/// Records carry no identifier of their own; the store tracks them by
/// handle. The color is derived from the category when the note is saved.
///
/// # Persisted Form
///
/// ```json
/// {
///     "title": "Rust book",
///     "url": "https://doc.rust-lang.org/book/",
///     "notes": "Chapter 10 on traits",
///     "category": "reading",
///     "color": [0.31, 0.77, 0.12, 1],
///     "favorite": false
/// }
/// ```
///
/// Only `title` is required when decoding; `url`, `notes`, and `category`
/// default to empty, `color` to [`Rgba::DEFAULT_CARD`], and `favorite` to
/// false.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    category: Category,
    #[serde(default)]
    color: Rgba,
    #[serde(default)]
    favorite: bool,
}

impl NoteRecord {
    /// Builds a record from a draft, trimming text fields.
    pub(crate) fn from_draft(draft: &NoteDraft, color: Rgba) -> Self {
        let mut record = Self {
            title: String::new(),
            url: String::new(),
            notes: String::new(),
            category: Category::default(),
            color,
            favorite: draft.favorite,
        };
        record.apply_draft(draft, color);
        record
    }

    /// Overwrites the editable fields from a draft. The favorite flag is
    /// left alone; it only changes through an explicit toggle.
    pub(crate) fn apply_draft(&mut self, draft: &NoteDraft, color: Rgba) {
        self.title = draft.title.trim().to_string();
        self.url = draft.url.trim().to_string();
        self.notes = draft.notes.trim().to_string();
        self.category = draft.category();
        self.color = color;
    }

    /// Flips the favorite flag and returns the new value.
    pub(crate) fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the note body.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Returns a short preview of the body for card listings.
    ///
    /// The first 50 characters are followed by `...`. An empty body
    /// previews as `No content available`.
    pub fn preview(&self) -> String {
        if self.notes.is_empty() {
            return EMPTY_PREVIEW.to_string();
        }
        let head: String = self.notes.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    }

    /// Case-insensitive substring match over title, category, and body.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.category.as_str().contains(needle)
            || self.notes.to_lowercase().contains(needle)
    }
}

impl fmt::Display for NoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.category.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} ({})", self.title, self.category)
        }
    }
}

impl fmt::Debug for NoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteRecord")
            .field("title", &self.title)
            .field("url", &self.url)
            .field("notes", &self.notes)
            .field("category", &self.category)
            .field("color", &self.color)
            .field("favorite", &self.favorite)
            .finish()
    }
}

/// The fields of the note dialog as typed so far.
///
/// Text is kept raw; trimming and category normalization happen when the
/// draft is committed to the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub url: String,
    pub notes: String,
    pub category: String,
    pub favorite: bool,
}

impl NoteDraft {
    /// Creates an empty draft (not a favorite).
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills a draft from a saved record, as the edit dialog does.
    pub fn from_record(record: &NoteRecord) -> Self {
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            notes: record.notes.clone(),
            category: record.category.as_str().to_string(),
            favorite: record.favorite,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the normalized category of the draft.
    pub fn category(&self) -> Category {
        Category::new(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blue() -> Rgba {
        Rgba::opaque(0.0, 0.0, 1.0).unwrap()
    }

    fn sample_draft() -> NoteDraft {
        NoteDraft::new()
            .title("  Rust Book ")
            .url(" https://doc.rust-lang.org/book/ ")
            .notes("\nChapter 10 on traits\n")
            .with_category(" Reading ")
    }

    // ===========================================
    // Draft commit
    // ===========================================

    #[test]
    fn from_draft_trims_text_fields() {
        let record = NoteRecord::from_draft(&sample_draft(), blue());
        assert_eq!(record.title(), "Rust Book");
        assert_eq!(record.url(), "https://doc.rust-lang.org/book/");
        assert_eq!(record.notes(), "Chapter 10 on traits");
    }

    #[test]
    fn from_draft_lowercases_category() {
        let record = NoteRecord::from_draft(&sample_draft(), blue());
        assert_eq!(record.category().as_str(), "reading");
    }

    #[test]
    fn from_draft_keeps_draft_favorite() {
        let mut draft = sample_draft();
        draft.favorite = true;
        assert!(NoteRecord::from_draft(&draft, blue()).is_favorite());
        assert!(!NoteRecord::from_draft(&sample_draft(), blue()).is_favorite());
    }

    #[test]
    fn apply_draft_preserves_favorite() {
        let mut record = NoteRecord::from_draft(&sample_draft(), blue());
        record.toggle_favorite();

        let edit = NoteDraft::new().title("Renamed");
        record.apply_draft(&edit, Rgba::DEFAULT_CARD);

        assert_eq!(record.title(), "Renamed");
        assert_eq!(record.color(), Rgba::DEFAULT_CARD);
        assert!(record.is_favorite());
    }

    #[test]
    fn toggle_favorite_twice_restores_state() {
        let mut record = NoteRecord::from_draft(&sample_draft(), blue());
        assert!(record.toggle_favorite());
        assert!(!record.toggle_favorite());
        assert!(!record.is_favorite());
    }

    #[test]
    fn draft_from_record_round_trips_fields() {
        let record = NoteRecord::from_draft(&sample_draft(), blue());
        let draft = NoteDraft::from_record(&record);
        assert_eq!(draft.title, "Rust Book");
        assert_eq!(draft.category, "reading");
        assert!(!draft.favorite);
    }

    // ===========================================
    // Preview and matching
    // ===========================================

    #[test]
    fn preview_truncates_to_fifty_chars() {
        let body = "a".repeat(80);
        let record = NoteRecord::from_draft(&NoteDraft::new().notes(body), blue());
        assert_eq!(record.preview(), format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn preview_of_short_body_still_has_ellipsis() {
        let record = NoteRecord::from_draft(&NoteDraft::new().notes("short"), blue());
        assert_eq!(record.preview(), "short...");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let body = "é".repeat(60);
        let record = NoteRecord::from_draft(&NoteDraft::new().notes(body), blue());
        assert_eq!(record.preview().chars().count(), 53);
    }

    #[test]
    fn preview_of_empty_body() {
        let record = NoteRecord::from_draft(&NoteDraft::new().title("t"), blue());
        assert_eq!(record.preview(), "No content available");
    }

    #[test]
    fn matches_title_category_and_body() {
        let record = NoteRecord::from_draft(&sample_draft(), blue());
        assert!(record.matches_lowercase("rust"));
        assert!(record.matches_lowercase("read"));
        assert!(record.matches_lowercase("traits"));
    }

    #[test]
    fn does_not_match_url() {
        let record = NoteRecord::from_draft(&sample_draft(), blue());
        assert!(!record.matches_lowercase("doc.rust-lang"));
    }

    // ===========================================
    // Serde
    // ===========================================

    #[test]
    fn deserializes_with_defaults() {
        let record: NoteRecord = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        assert_eq!(record.title(), "Bare");
        assert_eq!(record.url(), "");
        assert_eq!(record.notes(), "");
        assert!(record.category().is_empty());
        assert_eq!(record.color(), Rgba::DEFAULT_CARD);
        assert!(!record.is_favorite());
    }

    #[test]
    fn deserialize_requires_title() {
        let err = serde_json::from_str::<NoteRecord>(r#"{"notes": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn deserialize_lowercases_category() {
        let record: NoteRecord =
            serde_json::from_str(r#"{"title": "t", "category": "Work"}"#).unwrap();
        assert_eq!(record.category().as_str(), "work");
    }

    #[test]
    fn serializes_all_fields() {
        let record = NoteRecord::from_draft(&sample_draft(), blue());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["title"], "Rust Book");
        assert_eq!(value["category"], "reading");
        assert_eq!(value["color"], serde_json::json!([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(value["favorite"], false);
    }

    #[test]
    fn display_includes_category() {
        let record = NoteRecord::from_draft(&sample_draft(), blue());
        assert_eq!(record.to_string(), "Rust Book (reading)");
    }
}
