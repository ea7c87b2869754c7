// Entries are partitioned by the first letter of their name: bucket 0
// holds everything not starting with an ASCII letter, buckets 1 to 26 hold
// A to Z regardless of case. Buckets are sorted lazily, only when a search
// needs them.

use crate::entry::NameEntry;

pub(crate) const BUCKET_COUNT: usize = 27;

/// Bucket for a name, based on its first character.
///
/// Non-ASCII letters end up in bucket 0 along with digits
/// and punctuation.
pub(crate) fn bucket_index(name: &str) -> usize {
    match name.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some(c @ 'A'..='Z') => 1 + (c as usize - 'A' as usize),
        _ => 0,
    }
}

#[derive(Debug, Default)]
pub(crate) struct Bucket {
    entries: Vec<NameEntry>,
    dirty: bool,
}

impl Bucket {
    fn push(&mut self, entry: NameEntry) {
        self.entries.push(entry);
        self.dirty = true;
    }

    /// Sort by folded name, then by the natural order of the objects.
    ///
    /// Returns `true` if sorting was actually needed.
    pub(crate) fn ensure_sorted<T: Ord>(&mut self, objects: &[T]) -> bool {
        if !self.dirty {
            return false;
        }
        // stable, so equal entries keep their insertion order
        self.entries.sort_by(|a, b| {
            a.key
                .cmp(&b.key)
                .then_with(|| objects[a.object.index()].cmp(&objects[b.object.index()]))
        });
        self.dirty = false;
        true
    }

    #[inline]
    pub(crate) fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    #[inline]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Position of the first entry whose key is not less than `key`.
    pub(crate) fn lower_bound(&self, key: &str) -> usize {
        debug_assert!(!self.is_dirty(), "searching an unsorted bucket");
        self.entries.partition_point(|entry| entry.key.as_str() < key)
    }
}

/// The 27 buckets of one language variant.
#[derive(Debug, Default)]
pub(crate) struct BucketSet {
    buckets: [Bucket; BUCKET_COUNT],
}

impl BucketSet {
    pub(crate) fn push(&mut self, entry: NameEntry) {
        let index = bucket_index(&entry.display_name);
        self.buckets[index].push(entry);
    }

    /// The bucket at `index`, sorted first if needed.
    pub(crate) fn sorted<T: Ord>(&mut self, index: usize, objects: &[T]) -> &Bucket {
        let bucket = &mut self.buckets[index];
        if bucket.ensure_sorted(objects) {
            tracing::trace!(bucket = index, entries = bucket.entries.len(), "sorted bucket");
        }
        bucket
    }

    pub(crate) fn sort_all<T: Ord>(&mut self, objects: &[T]) {
        for index in 0..BUCKET_COUNT {
            self.sorted(index, objects);
        }
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> &Bucket {
        &self.buckets[index]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }
}
