use crate::index::ObjectId;
use crate::language::Language;

/// Whether an entry is responsible for releasing the object it refers to.
///
/// Every object in an index has exactly one owning entry. Entries for other
/// names of the same object (usually its latin name) share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ownership {
    /// This entry owns the object.
    Owning,
    /// This entry refers to an object owned by another entry.
    Shared,
}

/// A name registered in the index, pointing back at its object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub(crate) display_name: String,
    // case folded display name, the primary sort key
    pub(crate) key: String,
    pub(crate) object: ObjectId,
    pub(crate) language: Language,
    pub(crate) ownership: Ownership,
}

impl NameEntry {
    pub(crate) fn new(
        display_name: String,
        object: ObjectId,
        language: Language,
        ownership: Ownership,
    ) -> Self {
        Self {
            key: fold(&display_name),
            display_name,
            object,
            language,
            ownership,
        }
    }

    /// The name this entry was registered under.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The object this name refers to.
    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    #[inline]
    pub(crate) fn has_prefix(&self, folded_prefix: &str) -> bool {
        self.key.starts_with(folded_prefix)
    }
}

/// Lowercase `s` char by char for case-insensitive comparison.
///
/// This is simple case folding, not locale-aware collation.
pub(crate) fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
