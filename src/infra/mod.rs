//! Notes file I/O and the persisted document format

mod document;
mod fs;

pub use document::NotesDocument;
pub use fs::{JsonFile, PersistError, Persistence};
