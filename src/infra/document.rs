//! The persisted notes document and its JSON encoding.

use crate::domain::{Category, NoteRecord, Rgba};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;

/// Indentation used when writing the notes file.
const INDENT: &[u8] = b"    ";

/// Everything stored in the notes file.
///
/// ```json
/// {
///     "notes": [ ... ],
///     "category_colors": { "reading": [0.31, 0.77, 0.12, 1.0] }
/// }
/// ```
///
/// Either key may be absent in an existing file; it decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesDocument {
    #[serde(default)]
    pub notes: Vec<NoteRecord>,
    #[serde(default)]
    pub category_colors: BTreeMap<Category, Rgba>,
}

impl NotesDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes the document as four-space indented JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Decodes a document from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
