//! Proptest support for skyindex
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module generates arbitrary sky objects and
//! catalogs to feed into a [`NameIndex`](crate::NameIndex).
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! skyindex = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::object::{ObjectKind, SkyObject};

const KINDS: &[ObjectKind] = &[
    ObjectKind::Star,
    ObjectKind::Planet,
    ObjectKind::GlobularCluster,
    ObjectKind::Galaxy,
    ObjectKind::Constellation,
];

// mostly ASCII letters, with digits, punctuation and a few non-ASCII
// initials to exercise bucket 0
const NAME: &str = "[A-Za-z]{1,8}|[0-9*][A-Za-z0-9 ]{0,6}|[ÖéП][a-z]{0,6}";

/// Generate an arbitrary non-empty object name.
pub fn arb_name() -> impl Strategy<Value = String> {
    NAME
}

/// Generate an arbitrary sky object, possibly with long and translated names.
pub fn arb_sky_object() -> impl Strategy<Value = SkyObject> {
    (
        prop::sample::select(KINDS),
        arb_name(),
        prop::option::of(arb_name()),
        prop::option::of(arb_name()),
    )
        .prop_filter_map(
            "non-empty name",
            |(kind, name, long_name, translated_name)| {
                let mut object = SkyObject::new(kind, name).ok()?;
                if let Some(long_name) = long_name {
                    object = object.with_long_name(long_name);
                }
                if let Some(translated_name) = translated_name {
                    object = object.with_translated_name(translated_name);
                }
                Some(object)
            },
        )
}

/// Generate a catalog of up to `max` sky objects.
///
/// Names may repeat, as they do in real catalogs.
pub fn arb_catalog(max: usize) -> impl Strategy<Value = Vec<SkyObject>> {
    prop::collection::vec(arb_sky_object(), 0..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::object::Named;

    proptest! {
        #[test]
        fn test_arb_name_non_empty(name in arb_name()) {
            prop_assert!(!name.is_empty());
        }

        #[test]
        fn test_arb_catalog_bounded(catalog in arb_catalog(10)) {
            prop_assert!(catalog.len() <= 10);
            for object in &catalog {
                prop_assert!(!object.name().is_empty());
            }
        }
    }
}
