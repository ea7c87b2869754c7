use crate::error::Error;
use crate::language::Language;

/// Something that can be registered in a [`NameIndex`](crate::NameIndex).
///
/// The `Ord` bound is the natural total order of the entity. The index uses
/// it to order entries whose names compare equal ignoring case.
pub trait Named: Ord {
    /// The canonical (latin) name.
    fn name(&self) -> &str;

    /// The long form of the name, if the object has one.
    fn long_name(&self) -> Option<&str> {
        None
    }

    /// The localized form of the name. Falls back to the canonical name.
    fn translated_name(&self) -> &str {
        self.name()
    }

    /// The name to register for `language`.
    ///
    /// With `use_long_name` the long name wins if there is one.
    fn display_name(&self, language: Language, use_long_name: bool) -> &str {
        if use_long_name {
            if let Some(long_name) = self.long_name() {
                return long_name;
            }
        }
        match language {
            Language::Local => self.translated_name(),
            Language::Latin => self.name(),
        }
    }
}

/// The kind of a sky object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectKind {
    Star,
    CatalogStar,
    Planet,
    OpenCluster,
    GlobularCluster,
    GaseousNebula,
    PlanetaryNebula,
    SupernovaRemnant,
    Galaxy,
    Comet,
    Asteroid,
    Constellation,
}

/// A named object from a sky catalog.
///
/// Objects order by kind first, then by their names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyObject {
    kind: ObjectKind,
    name: String,
    long_name: Option<String>,
    translated_name: Option<String>,
}

impl SkyObject {
    /// Create a new object. The name must not be empty.
    pub fn new<S: Into<String>>(kind: ObjectKind, name: S) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            kind,
            name,
            long_name: None,
            translated_name: None,
        })
    }

    /// Set the long name. An empty long name is ignored.
    pub fn with_long_name<S: Into<String>>(mut self, long_name: S) -> Self {
        self.long_name = non_empty(long_name.into());
        self
    }

    /// Set the localized name. An empty translation is ignored.
    pub fn with_translated_name<S: Into<String>>(mut self, translated_name: S) -> Self {
        self.translated_name = non_empty(translated_name.into());
        self
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Named for SkyObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    fn translated_name(&self) -> &str {
        self.translated_name.as_deref().unwrap_or(&self.name)
    }
}
