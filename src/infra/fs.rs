//! Notes file I/O with atomic writes.

use crate::infra::document::NotesDocument;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors while reading or writing the notes file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse notes file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode notes for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },
}

impl PersistError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => PersistError::PermissionDenied { path: path.into() },
            _ => PersistError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Storage backend for the notes document.
///
/// Every mutation rewrites the whole document; there is no incremental
/// update.
pub trait Persistence {
    /// Loads the document, creating an empty one if none exists yet.
    fn load(&mut self) -> Result<NotesDocument, PersistError>;

    /// Replaces the stored document.
    fn save(&mut self, doc: &NotesDocument) -> Result<(), PersistError>;
}

/// The notes document stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the temp file is created in; a bare file name means the
    /// current directory.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Persistence for JsonFile {
    /// Reads the notes file.
    ///
    /// A missing file is not an error: an empty document is written in its
    /// place and returned.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Parse` if the file is not a valid notes
    /// document, and the I/O variants if it cannot be read or created.
    fn load(&mut self) -> Result<NotesDocument, PersistError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "notes file not found, creating it");
                let doc = NotesDocument::new();
                self.save(&doc)?;
                return Ok(doc);
            }
            Err(e) => return Err(PersistError::from_io(&self.path, e)),
        };

        let doc = NotesDocument::from_json(&bytes).map_err(|e| PersistError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!(
            path = %self.path.display(),
            notes = doc.notes.len(),
            categories = doc.category_colors.len(),
            "loaded notes file"
        );
        Ok(doc)
    }

    /// Writes the document atomically.
    ///
    /// Uses a temporary file in the same directory and a rename, so readers
    /// never observe a partially written file.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::ParentNotFound` if the directory doesn't exist.
    /// Returns `PersistError::AtomicWrite` if the rename fails.
    fn save(&mut self, doc: &NotesDocument) -> Result<(), PersistError> {
        let parent = self.parent_dir();
        if !parent.is_dir() {
            return Err(PersistError::ParentNotFound {
                path: parent.into(),
            });
        }

        let content = doc.to_json().map_err(|e| PersistError::Encode {
            path: self.path.clone(),
            source: e,
        })?;

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| PersistError::from_io(&self.path, e))?;
        temp.write_all(&content)
            .map_err(|e| PersistError::from_io(&self.path, e))?;

        // The rename replaces the file, so carry its mode over to the new one
        if let Ok(metadata) = std::fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| PersistError::from_io(&self.path, e))?;
        }
        temp.persist(&self.path)
            .map_err(|e| PersistError::AtomicWrite {
                path: self.path.clone(),
                source: e.error,
            })?;

        tracing::debug!(path = %self.path.display(), notes = doc.notes.len(), "saved notes file");
        Ok(())
    }
}
