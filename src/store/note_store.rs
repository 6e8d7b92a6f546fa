//! In-memory note list with per-category colors.

use crate::domain::{Category, NoteDraft, NoteRecord, Rgba};
use crate::infra::NotesDocument;
use crate::store::colors::{ColorSource, RandomColors};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Handle to a note held by a [`NoteStore`].
///
/// Keys are assigned when a record enters the store and are never reused
/// or persisted. Two records with identical fields still have distinct
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteKey(u64);

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors from store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The key does not refer to a note in the store.
    #[error("note not found: {key}")]
    NoteNotFound { key: NoteKey },
}

/// The notes in memory plus the category color map.
///
/// A category receives a color the first time a note is saved with it;
/// every later note in that category reuses the same color.
#[derive(Debug)]
pub struct NoteStore<C: ColorSource = RandomColors> {
    entries: Vec<(NoteKey, NoteRecord)>,
    category_colors: BTreeMap<Category, Rgba>,
    categories: Vec<Category>,
    next_key: u64,
    colors: C,
}

impl NoteStore<RandomColors> {
    /// Creates an empty store with randomly drawn category colors.
    pub fn new() -> Self {
        Self::with_color_source(RandomColors::new())
    }

    /// Creates an empty store whose color draws are deterministic.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_color_source(RandomColors::seeded(seed))
    }

    /// Creates a store holding the notes of a loaded document.
    pub fn from_document(doc: NotesDocument) -> Self {
        Self::from_document_with(doc, RandomColors::new())
    }
}

impl Default for NoteStore<RandomColors> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ColorSource> NoteStore<C> {
    pub fn with_color_source(colors: C) -> Self {
        Self {
            entries: Vec::new(),
            category_colors: BTreeMap::new(),
            categories: Vec::new(),
            next_key: 0,
            colors,
        }
    }

    /// Creates a store from a document, using `colors` for new categories.
    ///
    /// Known categories are seeded from the notes (in order) and then from
    /// the color map.
    pub fn from_document_with(doc: NotesDocument, colors: C) -> Self {
        let mut store = Self::with_color_source(colors);
        store.category_colors = doc.category_colors;
        for record in doc.notes {
            store.track_category(record.category().clone());
            store.push(record);
        }
        let mapped: Vec<Category> = store.category_colors.keys().cloned().collect();
        for category in mapped {
            store.track_category(category);
        }
        store
    }

    /// Snapshot of the store in its persisted form.
    pub fn to_document(&self) -> NotesDocument {
        NotesDocument {
            notes: self.entries.iter().map(|(_, r)| r.clone()).collect(),
            category_colors: self.category_colors.clone(),
        }
    }

    // ===========================================
    // Mutation
    // ===========================================

    /// Saves a new note built from `draft` and returns its key.
    ///
    /// The note takes its category's color, drawing and recording a new one
    /// if the category has none yet.
    pub fn add(&mut self, draft: &NoteDraft) -> NoteKey {
        let category = draft.category();
        let color = self.color_for(&category);
        self.track_category(category);
        self.push(NoteRecord::from_draft(draft, color))
    }

    /// Overwrites an existing note's fields from `draft`.
    ///
    /// The color is re-derived from the (possibly changed) category. The
    /// favorite flag is not touched.
    pub fn update(&mut self, key: NoteKey, draft: &NoteDraft) -> Result<(), StoreError> {
        let index = self.index_of(key)?;
        let category = draft.category();
        let color = self.color_for(&category);
        self.track_category(category);
        self.entries[index].1.apply_draft(draft, color);
        Ok(())
    }

    /// Updates `key` when given, otherwise adds a new note.
    pub fn add_or_update(
        &mut self,
        key: Option<NoteKey>,
        draft: &NoteDraft,
    ) -> Result<NoteKey, StoreError> {
        match key {
            Some(key) => self.update(key, draft).map(|()| key),
            None => Ok(self.add(draft)),
        }
    }

    /// Removes the note and returns it.
    pub fn delete(&mut self, key: NoteKey) -> Result<NoteRecord, StoreError> {
        let index = self.index_of(key)?;
        let (_, record) = self.entries.remove(index);
        tracing::debug!(%key, title = record.title(), "deleted note");
        Ok(record)
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, key: NoteKey) -> Result<bool, StoreError> {
        let index = self.index_of(key)?;
        Ok(self.entries[index].1.toggle_favorite())
    }

    // ===========================================
    // Queries
    // ===========================================

    pub fn get(&self, key: NoteKey) -> Option<&NoteRecord> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    /// Iterates notes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NoteKey, &NoteRecord)> {
        self.entries.iter().map(|(k, r)| (*k, r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based position of the note in list order.
    pub fn position(&self, key: NoteKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    /// Key of the note at a zero-based list position.
    pub fn key_at(&self, index: usize) -> Option<NoteKey> {
        self.entries.get(index).map(|(k, _)| *k)
    }

    /// Categories in the order they were first seen.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_color(&self, category: &Category) -> Option<Rgba> {
        self.category_colors.get(category).copied()
    }

    pub fn category_colors(&self) -> &BTreeMap<Category, Rgba> {
        &self.category_colors
    }

    /// Known categories containing `partial`, ignoring case.
    pub fn suggest_categories(&self, partial: &str) -> Vec<&Category> {
        let needle = partial.trim().to_lowercase();
        self.categories
            .iter()
            .filter(|c| c.as_str().contains(&needle))
            .collect()
    }

    // ===========================================
    // Internals
    // ===========================================

    fn push(&mut self, record: NoteRecord) -> NoteKey {
        let key = NoteKey(self.next_key);
        self.next_key += 1;
        self.entries.push((key, record));
        key
    }

    fn index_of(&self, key: NoteKey) -> Result<usize, StoreError> {
        self.position(key).ok_or(StoreError::NoteNotFound { key })
    }

    fn color_for(&mut self, category: &Category) -> Rgba {
        if let Some(color) = self.category_colors.get(category) {
            return *color;
        }
        let color = self.colors.next_color();
        tracing::debug!(category = category.as_str(), color = %color, "assigned category color");
        self.category_colors.insert(category.clone(), color);
        color
    }

    fn track_category(&mut self, category: Category) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }
}
