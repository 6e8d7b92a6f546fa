//! Core types: NoteRecord, NoteDraft, Category, Rgba

mod category;
mod color;
mod note;

pub use category::Category;
pub use color::{ParseColorError, Rgba};
pub use note::{NoteDraft, NoteRecord};
