use crate::bucket::{BucketSet, BUCKET_COUNT};
use crate::index::ObjectId;
use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum ScanMode {
    /// Nothing left to yield.
    #[default]
    Exhausted,
    /// Walk every bucket from 0 to 26.
    AllBuckets,
    /// Stay within one bucket while entries match the folded prefix.
    SingleBucket { prefix: String },
}

/// The state of a prefix scan over a [`NameIndex`](crate::NameIndex).
///
/// You obtain one through [`NameIndex::cursor`](crate::NameIndex::cursor)
/// and drive it with [`NameIndex::advance`](crate::NameIndex::advance).
/// Cursors are independent of each other, so several scans can be in flight
/// at the same time.
///
/// A cursor remembers positions, not entries. Appending to the index while
/// a scan is in progress can make it skip or repeat entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cursor {
    pub(crate) language: Language,
    pub(crate) bucket: usize,
    pub(crate) position: usize,
    pub(crate) mode: ScanMode,
}

impl Cursor {
    pub(crate) fn all_buckets(language: Language) -> Self {
        Self {
            language,
            bucket: 0,
            position: 0,
            mode: ScanMode::AllBuckets,
        }
    }

    pub(crate) fn single_bucket(
        language: Language,
        bucket: usize,
        position: usize,
        prefix: String,
    ) -> Self {
        Self {
            language,
            bucket,
            position,
            mode: ScanMode::SingleBucket { prefix },
        }
    }

    /// The language this cursor scans.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns `true` once the scan has nothing more to yield.
    pub fn is_exhausted(&self) -> bool {
        self.mode == ScanMode::Exhausted
    }

    fn exhaust(&mut self) -> Option<ObjectId> {
        self.mode = ScanMode::Exhausted;
        None
    }

    /// Move to the next match, sorting buckets on first visit.
    pub(crate) fn step<T: Ord>(&mut self, set: &mut BucketSet, objects: &[T]) -> Option<ObjectId> {
        match &self.mode {
            ScanMode::Exhausted => None,
            ScanMode::SingleBucket { prefix } => {
                let found = set
                    .sorted(self.bucket, objects)
                    .entries()
                    .get(self.position)
                    .filter(|entry| entry.has_prefix(prefix))
                    .map(|entry| entry.object());
                match found {
                    Some(object) => {
                        self.position += 1;
                        Some(object)
                    }
                    // sorted order has left the prefix window
                    None => self.exhaust(),
                }
            }
            ScanMode::AllBuckets => {
                while self.bucket < BUCKET_COUNT {
                    let bucket = set.sorted(self.bucket, objects);
                    if let Some(entry) = bucket.entries().get(self.position) {
                        self.position += 1;
                        return Some(entry.object());
                    }
                    self.bucket += 1;
                    self.position = 0;
                }
                self.exhaust()
            }
        }
    }
}
