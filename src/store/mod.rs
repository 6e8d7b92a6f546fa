//! In-memory notes, filtering, and the editing session

mod colors;
pub mod filter;
mod note_store;
mod session;

pub use colors::{ColorSource, RandomColors};
pub use filter::{ViewMode, favorites, search, visible};
pub use note_store::{NoteKey, NoteStore, StoreError};
pub use session::{Dialog, Session, SessionError};
