use crate::index::ObjectId;

/// Errors raised while building a name index.
///
/// Searching never fails: a missing name is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A name was empty where a non-empty display name is required.
    EmptyName,
    /// A shared reference pointed at an object this index does not own.
    UnknownObject(ObjectId),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyName => write!(f, "name must not be empty"),
            Error::UnknownObject(id) => write!(f, "unknown object {}", id),
        }
    }
}

impl std::error::Error for Error {}
