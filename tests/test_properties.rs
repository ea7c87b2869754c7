use ahash::HashSet;
use proptest::prelude::*;

use skyindex::{Language, NameIndex, Object, ObjectId, ObjectKind, SkyObject};

const NAME: &str = "[A-Za-z]{1,6}|[0-9*][A-Za-z0-9 ]{0,4}|[ÖéП][a-z]{0,4}";

fn build(names: &[String]) -> (NameIndex<SkyObject>, Vec<ObjectId>) {
    let mut index = NameIndex::new();
    let ids = names
        .iter()
        .map(|name| {
            let star = SkyObject::new(ObjectKind::Star, name.as_str()).unwrap();
            index
                .append(Object::Owned(star), Language::Local, false)
                .unwrap()
        })
        .collect();
    (index, ids)
}

fn bucket(name: &str) -> usize {
    match name.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some(c @ 'A'..='Z') => 1 + (c as usize - 'A' as usize),
        _ => 0,
    }
}

fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

proptest! {
    #[test]
    fn test_count_matches_appends(names in prop::collection::vec(NAME, 0..40)) {
        let (index, _) = build(&names);
        prop_assert_eq!(index.count(), names.len());
        prop_assert_eq!(index.count_in(Language::Latin), 0);
    }

    #[test]
    fn test_scan_all_covers_everything_once(names in prop::collection::vec(NAME, 0..40)) {
        let (mut index, ids) = build(&names);
        let mut scanned = Vec::new();
        let mut found = index.first("");
        while let Some(id) = found {
            scanned.push(id);
            found = index.next();
        }
        prop_assert_eq!(scanned.len(), ids.len());
        let unique: HashSet<_> = scanned.into_iter().collect();
        prop_assert_eq!(unique, ids.into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_entries_in_bucket_then_folded_order(names in prop::collection::vec(NAME, 0..40)) {
        let (mut index, _) = build(&names);
        let keys: Vec<_> = index
            .entries()
            .map(|entry| (bucket(entry.display_name()), fold(entry.display_name())))
            .collect();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_prefix_scan_matches_brute_force(
        names in prop::collection::vec(NAME, 0..40),
        prefix in "[A-Za-z0-9]{1,2}",
    ) {
        let (mut index, ids) = build(&names);
        let mut scanned = Vec::new();
        let mut found = index.first(&prefix);
        while let Some(id) = found {
            scanned.push(id);
            found = index.next();
        }
        scanned.sort();

        let folded_prefix = fold(&prefix);
        let mut expected: Vec<_> = names
            .iter()
            .zip(ids)
            .filter(|(name, _)| bucket(name) == bucket(&prefix) && fold(name).starts_with(&folded_prefix))
            .map(|(_, id)| id)
            .collect();
        expected.sort();
        prop_assert_eq!(scanned, expected);
    }

    #[test]
    fn test_find_every_name(names in prop::collection::vec(NAME, 1..40)) {
        let (mut index, _) = build(&names);
        for name in &names {
            let id = index.find(name);
            prop_assert!(id.is_some(), "{} not found", name);
        }
    }

    #[test]
    fn test_repeated_scans_identical(names in prop::collection::vec(NAME, 0..40)) {
        let (mut index, _) = build(&names);
        let first: Vec<_> = index.entries().map(|e| e.object()).collect();
        if let Some(name) = names.first() {
            index.find(name);
        }
        let second: Vec<_> = index.entries().map(|e| e.object()).collect();
        prop_assert_eq!(first, second);
    }
}
