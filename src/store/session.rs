//! The note dialog and view state, bound to a persistence backend.
//!
//! A [`Session`] owns the loaded [`NoteStore`] and applies user actions the
//! way the note editor does: open a dialog for a new or existing note, edit
//! the draft, then save, cancel, delete, or toggle its favorite flag. Every
//! action that changes a note rewrites the whole document.

use crate::domain::{NoteDraft, NoteRecord};
use crate::infra::{PersistError, Persistence};
use crate::store::colors::{ColorSource, RandomColors};
use crate::store::filter::{self, ViewMode};
use crate::store::note_store::{NoteKey, NoteStore, StoreError};
use thiserror::Error;

/// Errors from session actions.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no note dialog is open")]
    NoDialog,

    #[error("only a saved note can be deleted")]
    NotSaved,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// State of the note dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    #[default]
    Closed,
    /// Composing a note that is not in the store yet.
    New(NoteDraft),
    /// Editing a saved note.
    Existing { key: NoteKey, draft: NoteDraft },
}

impl Dialog {
    /// The draft being edited, if a dialog is open.
    pub fn draft(&self) -> Option<&NoteDraft> {
        match self {
            Dialog::New(draft) | Dialog::Existing { draft, .. } => Some(draft),
            Dialog::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut NoteDraft> {
        match self {
            Dialog::New(draft) | Dialog::Existing { draft, .. } => Some(draft),
            Dialog::Closed => None,
        }
    }
}

/// A loaded notebook with its dialog and view state.
pub struct Session<P: Persistence, C: ColorSource = RandomColors> {
    store: NoteStore<C>,
    backend: P,
    view: ViewMode,
    query: String,
    dialog: Dialog,
}

impl<P: Persistence> Session<P, RandomColors> {
    /// Loads the document from `backend`.
    pub fn open(backend: P) -> Result<Self, PersistError> {
        Self::open_with(backend, RandomColors::new())
    }
}

impl<P: Persistence, C: ColorSource> Session<P, C> {
    /// Loads the document from `backend`, drawing new category colors from
    /// `colors`.
    pub fn open_with(mut backend: P, colors: C) -> Result<Self, PersistError> {
        let doc = backend.load()?;
        Ok(Self {
            store: NoteStore::from_document_with(doc, colors),
            backend,
            view: ViewMode::All,
            query: String::new(),
            dialog: Dialog::Closed,
        })
    }

    pub fn store(&self) -> &NoteStore<C> {
        &self.store
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    // ===========================================
    // View
    // ===========================================

    /// Sets the search text. Only the all-notes view applies it.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Switches between all notes and favorites, clearing the search.
    pub fn toggle_favorites_view(&mut self) -> ViewMode {
        self.view = self.view.toggled();
        self.query.clear();
        self.view
    }

    /// Notes shown for the current view and search.
    pub fn visible(&self) -> Vec<(NoteKey, &NoteRecord)> {
        filter::visible(&self.store, self.view, &self.query)
    }

    // ===========================================
    // Dialog
    // ===========================================

    /// Opens the dialog for a new, empty note.
    pub fn open_new(&mut self) -> &mut NoteDraft {
        self.dialog = Dialog::New(NoteDraft::new());
        self.dialog.draft_mut().expect("dialog was just opened")
    }

    /// Opens the dialog pre-filled from a saved note.
    pub fn open_existing(&mut self, key: NoteKey) -> Result<&mut NoteDraft, SessionError> {
        let record = self
            .store
            .get(key)
            .ok_or(StoreError::NoteNotFound { key })?;
        let draft = NoteDraft::from_record(record);
        self.dialog = Dialog::Existing { key, draft };
        Ok(self.dialog.draft_mut().expect("dialog was just opened"))
    }

    /// The draft of the open dialog.
    pub fn draft_mut(&mut self) -> Result<&mut NoteDraft, SessionError> {
        self.dialog.draft_mut().ok_or(SessionError::NoDialog)
    }

    /// Commits the draft, persists, and closes the dialog.
    ///
    /// Returns the key of the saved note.
    pub fn save(&mut self) -> Result<NoteKey, SessionError> {
        let key = match &self.dialog {
            Dialog::Closed => return Err(SessionError::NoDialog),
            Dialog::New(draft) => self.store.add(draft),
            Dialog::Existing { key, draft } => self.store.add_or_update(Some(*key), draft)?,
        };
        self.persist()?;
        self.dialog = Dialog::Closed;
        Ok(key)
    }

    /// Closes the dialog, discarding the draft.
    pub fn cancel(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Deletes the note being edited, persists, and closes the dialog.
    pub fn delete(&mut self) -> Result<NoteRecord, SessionError> {
        let key = match &self.dialog {
            Dialog::Closed => return Err(SessionError::NoDialog),
            Dialog::New(_) => return Err(SessionError::NotSaved),
            Dialog::Existing { key, .. } => *key,
        };
        let record = self.store.delete(key)?;
        self.persist()?;
        self.dialog = Dialog::Closed;
        Ok(record)
    }

    /// Flips the favorite flag of the note in the dialog and persists.
    ///
    /// A new note is saved first with whatever has been typed, so the
    /// dialog ends up editing that saved note. The dialog stays open.
    /// Returns the new favorite value.
    pub fn toggle_favorite(&mut self) -> Result<bool, SessionError> {
        let (key, draft) = match std::mem::take(&mut self.dialog) {
            Dialog::Closed => return Err(SessionError::NoDialog),
            Dialog::New(mut draft) => {
                draft.favorite = false;
                let key = self.store.add(&draft);
                tracing::debug!(%key, "saved new note to mark it favorite");
                (key, draft)
            }
            Dialog::Existing { key, draft } => (key, draft),
        };
        // Keep the dialog pointing at the note even if the toggle fails.
        self.dialog = Dialog::Existing { key, draft };

        let favorite = self.store.toggle_favorite(key)?;
        if let Dialog::Existing { draft, .. } = &mut self.dialog {
            draft.favorite = favorite;
        }
        self.persist()?;
        Ok(favorite)
    }

    fn persist(&mut self) -> Result<(), PersistError> {
        self.backend.save(&self.store.to_document())
    }
}
