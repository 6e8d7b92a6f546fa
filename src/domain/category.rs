//! Case-insensitive category label shared by notes and the color map.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A note category.
///
/// Categories are normalized the same way everywhere they are stored or
/// compared: surrounding whitespace is trimmed and the text is lowercased.
/// `Work`, ` work `, and `WORK` all name the same category.
///
/// The empty category is valid; a note saved with a blank category field
/// still shares one color with every other uncategorized note.
///
/// # Examples
///
/// ```
/// use notecards::domain::Category;
///
/// let category = Category::new("  Reading List ");
/// assert_eq!(category.as_str(), "reading list");
/// assert_eq!(category, Category::new("READING LIST"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String); // Always stored trimmed and lowercase

impl Category {
    /// Creates a category from raw user input, normalizing it.
    pub fn new(s: &str) -> Self {
        Self(s.trim().to_lowercase())
    }

    /// Returns the normalized category as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the blank category.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category(\"{}\")", self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}
