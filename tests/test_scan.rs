use ahash::HashSet;
use insta::assert_snapshot;

use skyindex::{Language, NameIndex, Named, Object, ObjectId, ObjectKind, SkyObject};

fn index_with(names: &[&str]) -> (NameIndex<SkyObject>, Vec<ObjectId>) {
    let mut index = NameIndex::new();
    let mut ids = Vec::new();
    for name in names {
        let star = SkyObject::new(ObjectKind::Star, *name).unwrap();
        ids.push(
            index
                .append(Object::Owned(star), Language::Local, false)
                .unwrap(),
        );
    }
    (index, ids)
}

fn scan_all(index: &mut NameIndex<SkyObject>) -> Vec<ObjectId> {
    let mut ids = Vec::new();
    let mut found = index.first("");
    while let Some(id) = found {
        ids.push(id);
        found = index.next();
    }
    ids
}

fn names(index: &NameIndex<SkyObject>, ids: &[ObjectId]) -> String {
    ids.iter()
        .map(|id| index.object(*id).name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[test]
fn test_scan_all_buckets_in_order() {
    let (mut index, ids) = index_with(&[
        "Zosma", "3C 273", "mira", "Mizar", "Achernar", "Ökliptik", "Capella",
    ]);
    let scanned = scan_all(&mut index);
    assert_eq!(scanned.len(), ids.len());
    assert_snapshot!(
        names(&index, &scanned),
        @"3C 273, Ökliptik, Achernar, Capella, mira, Mizar, Zosma"
    );
}

#[test]
fn test_scan_all_yields_each_once() {
    let (mut index, ids) = index_with(&["Vega", "Deneb", "Altair", "Albireo", "Sadr", "Gienah"]);
    let scanned = scan_all(&mut index);
    let unique: HashSet<_> = scanned.iter().copied().collect();
    assert_eq!(scanned.len(), ids.len());
    assert_eq!(unique, ids.into_iter().collect::<HashSet<_>>());
}

#[test]
fn test_scan_all_with_empty_bucket_zero() {
    let (mut index, ids) = index_with(&["Vega", "Deneb"]);
    assert_eq!(index.first(""), Some(ids[1]));
    assert_eq!(index.next(), Some(ids[0]));
    assert_eq!(index.next(), None);
}

#[test]
fn test_scan_all_empty_index() {
    let mut index = NameIndex::<SkyObject>::new();
    assert_eq!(index.first(""), None);
    assert_eq!(index.next(), None);
}

#[test]
fn test_repeated_scan_same_order() {
    let (mut index, _) = index_with(&["deneb", "Deneb", "Denebola", "DENEB", "Diphda"]);
    let first = scan_all(&mut index);
    index.find("Deneb");
    index.find("Deneb");
    let second = scan_all(&mut index);
    assert_eq!(first, second);
}

#[test]
fn test_append_between_scans_is_picked_up() {
    let (mut index, _) = index_with(&["Vega", "Deneb"]);
    assert_eq!(scan_all(&mut index).len(), 2);
    let star = SkyObject::new(ObjectKind::Star, "Altair").unwrap();
    let altair = index
        .append(Object::Owned(star), Language::Local, false)
        .unwrap();
    let scanned = scan_all(&mut index);
    assert_eq!(scanned.len(), 3);
    assert_eq!(scanned[0], altair);
}

#[test]
fn test_entries_match_scan() {
    let (mut index, _) = index_with(&["Zosma", "3C 273", "mira", "Mizar", "Achernar"]);
    let scanned = scan_all(&mut index);
    let entries: Vec<_> = index.entries().map(|e| e.object()).collect();
    assert_eq!(entries, scanned);
}
