//! Builder for test notes with sensible defaults.

use notecards::domain::NoteDraft;

/// Builder for creating test notes with sensible defaults.
///
/// Only the title is required; everything else starts empty and
/// unstarred.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    url: String,
    body: String,
    category: String,
    favorite: bool,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: String::new(),
            body: String::new(),
            category: String::new(),
            favorite: false,
        }
    }

    /// Sets the URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the body content (builder method).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the category (raw, normalized on save).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Marks the note as a favorite.
    pub fn favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the note should be starred.
    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Converts this TestNote to the dialog draft used to save it.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft::new()
            .title(&self.title)
            .url(&self.url)
            .notes(&self.body)
            .with_category(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_new_with_title() {
        let note = TestNote::new("My Test Note");
        assert_eq!(note.title(), "My Test Note");
        assert!(!note.is_favorite());
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Reading")
            .url("https://example.com")
            .body("chapter one")
            .category("Books")
            .favorite();

        let draft = note.to_draft();
        assert_eq!(draft.title, "Reading");
        assert_eq!(draft.url, "https://example.com");
        assert_eq!(draft.notes, "chapter one");
        assert_eq!(draft.category().as_str(), "books");
        assert!(note.is_favorite());
    }
}
