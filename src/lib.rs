//! A name index for sky catalogs.
//!
//! [`NameIndex`] stores the names of astronomical objects in two variants,
//! localized and latin, and supports case-insensitive prefix search and
//! case-sensitive exact lookup in either of them.
//!
//! A catalog loader registers each object with [`NameIndex::append`]. The
//! first registration hands the object over to the index
//! ([`Object::Owned`]); further names for the same object refer back to it
//! ([`Object::Shared`]). Search results are [`ObjectId`] values that you
//! resolve with [`NameIndex::object`].
//!
//! ```rust
//! use skyindex::{Language, NameIndex, Named, Object, ObjectKind, SkyObject};
//!
//! let mut index = NameIndex::new();
//! for name in ["Altair", "alcor", "Aldebaran", "Bellatrix"] {
//!     let star = SkyObject::new(ObjectKind::Star, name)?;
//!     index.append(Object::Owned(star), Language::Local, false)?;
//! }
//!
//! let mut found = Vec::new();
//! let mut next = index.first("al");
//! while let Some(id) = next {
//!     found.push(index.object(id).name().to_string());
//!     next = index.next();
//! }
//! assert_eq!(found, ["alcor", "Aldebaran", "Altair"]);
//! # Ok::<(), skyindex::Error>(())
//! ```
#![forbid(unsafe_code)]

mod bucket;
mod cursor;
mod entry;
mod error;
mod index;
mod language;
mod object;

#[cfg(feature = "proptest")]
pub mod proptest;

pub use cursor::Cursor;
pub use entry::{NameEntry, Ownership};
pub use error::Error;
pub use index::{NameIndex, Object, ObjectId};
pub use language::Language;
pub use object::{Named, ObjectKind, SkyObject};
