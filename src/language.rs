/// The naming scheme an entry is registered under.
///
/// Every object can be known by a localized (translated) name and by its
/// canonical latin name. The index keeps the two variants apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// Localized or translated names.
    #[default]
    Local,
    /// Canonical latin names.
    Latin,
}

impl Language {
    /// The other language variant.
    pub fn other(self) -> Language {
        match self {
            Language::Local => Language::Latin,
            Language::Latin => Language::Local,
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            Language::Local => 0,
            Language::Latin => 1,
        }
    }
}

/// `true` selects latin names, `false` localized ones.
impl From<bool> for Language {
    fn from(latin: bool) -> Self {
        if latin {
            Language::Latin
        } else {
            Language::Local
        }
    }
}
