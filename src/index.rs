use ahash::HashSet;

use crate::bucket::{bucket_index, BucketSet, BUCKET_COUNT};
use crate::cursor::Cursor;
use crate::entry::{fold, NameEntry, Ownership};
use crate::error::Error;
use crate::language::Language;
use crate::object::Named;

// names that never resolve to an object through `lookup`
const PLACEHOLDER_NAMES: &[&str] = &["star", "nothing"];

/// An object stored in a [`NameIndex`].
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        ObjectId(index as u32)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The object to register a name for.
#[derive(Debug)]
pub enum Object<T> {
    /// Hand the object over to the index. The new entry owns it.
    Owned(T),
    /// Refer to an object the index already owns. The new entry shares it.
    Shared(ObjectId),
}

/// The `NameIndex` stores the names of sky objects and lets you search
/// them by prefix or look them up by exact name.
///
/// Names are kept in two independent variants, [`Language::Local`] and
/// [`Language::Latin`]. Searches address the active language, which you
/// change with [`NameIndex::set_language`].
///
/// Within a language, names are partitioned into 27 buckets by their first
/// letter. A bucket is only sorted when a search first needs it after an
/// append, so building the index is cheap.
///
/// ```rust
/// use skyindex::{Language, NameIndex, Object, ObjectKind, SkyObject};
///
/// let mut index = NameIndex::new();
/// let altair = SkyObject::new(ObjectKind::Star, "Altair")?;
/// let id = index.append(Object::Owned(altair), Language::Local, false)?;
///
/// assert_eq!(index.find("Altair"), Some(id));
/// assert_eq!(index.first("alt"), Some(id));
/// assert_eq!(index.next(), None);
/// # Ok::<(), skyindex::Error>(())
/// ```
#[derive(Debug)]
pub struct NameIndex<T> {
    objects: Vec<T>,
    sets: [BucketSet; 2],
    counts: [usize; 2],
    language: Language,
    scan: Cursor,
}

impl<T: Named> NameIndex<T> {
    /// Create an empty index searching local names.
    pub fn new() -> Self {
        Self::with_language(Language::Local)
    }

    /// Create an empty index searching `language`.
    pub fn with_language(language: Language) -> Self {
        NameIndex {
            objects: Vec::new(),
            sets: Default::default(),
            counts: [0; 2],
            language,
            scan: Cursor::default(),
        }
    }

    /// Register a name for an object under `language`.
    ///
    /// The name is taken from the object: its long name if `use_long_name`
    /// is set and it has one, otherwise its translated name for
    /// [`Language::Local`] or its canonical name for [`Language::Latin`].
    ///
    /// Duplicate names are kept. Returns the id of the object, which you can
    /// pass as [`Object::Shared`] to register more names for it.
    pub fn append(
        &mut self,
        object: Object<T>,
        language: Language,
        use_long_name: bool,
    ) -> Result<ObjectId, Error> {
        let (id, name, ownership) = match object {
            Object::Owned(object) => {
                let name = object.display_name(language, use_long_name).to_string();
                if name.is_empty() {
                    return Err(Error::EmptyName);
                }
                let id = ObjectId::new(self.objects.len());
                self.objects.push(object);
                (id, name, Ownership::Owning)
            }
            Object::Shared(id) => {
                let object = self.get(id).ok_or(Error::UnknownObject(id))?;
                let name = object.display_name(language, use_long_name).to_string();
                if name.is_empty() {
                    return Err(Error::EmptyName);
                }
                (id, name, Ownership::Shared)
            }
        };
        self.sets[language.slot()].push(NameEntry::new(name, id, language, ownership));
        self.counts[language.slot()] += 1;
        Ok(id)
    }

    /// Find an object by its exact name in the active language.
    ///
    /// The match is case-sensitive. If several entries carry the name, the
    /// first one in sorted order wins.
    pub fn find(&mut self, name: &str) -> Option<ObjectId> {
        self.find_in(self.language, name)
    }

    fn find_in(&mut self, language: Language, name: &str) -> Option<ObjectId> {
        if name.is_empty() {
            return None;
        }
        let key = fold(name);
        let bucket = self.sets[language.slot()].sorted(bucket_index(name), &self.objects);
        let start = bucket.lower_bound(&key);
        bucket.entries()[start..]
            .iter()
            .take_while(|entry| entry.key == key)
            .find(|entry| entry.display_name == name)
            .map(|entry| entry.object)
    }

    /// Start a case-insensitive prefix scan in the active language.
    ///
    /// A non-empty prefix only scans the bucket of its first letter. An
    /// empty prefix scans all buckets in order.
    ///
    /// The returned cursor is positioned before the first match; drive it
    /// with [`NameIndex::advance`].
    pub fn cursor(&mut self, prefix: &str) -> Cursor {
        if prefix.is_empty() {
            return Cursor::all_buckets(self.language);
        }
        let key = fold(prefix);
        let bucket = bucket_index(prefix);
        let position = self.sets[self.language.slot()]
            .sorted(bucket, &self.objects)
            .lower_bound(&key);
        Cursor::single_bucket(self.language, bucket, position, key)
    }

    /// Advance `cursor` to the next match.
    ///
    /// Returns `None` once the scan is exhausted, and keeps doing so.
    pub fn advance(&mut self, cursor: &mut Cursor) -> Option<ObjectId> {
        cursor.step(&mut self.sets[cursor.language.slot()], &self.objects)
    }

    /// Start a prefix scan and return the first match.
    ///
    /// This replaces the scan [`NameIndex::next`] continues; any scan
    /// started earlier is abandoned. Use [`NameIndex::cursor`] if you need
    /// several scans at once.
    pub fn first(&mut self, prefix: &str) -> Option<ObjectId> {
        self.scan = self.cursor(prefix);
        self.next()
    }

    /// The next match of the scan started by [`NameIndex::first`].
    ///
    /// Without a scan in progress this returns `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<ObjectId> {
        let mut scan = std::mem::take(&mut self.scan);
        let found = self.advance(&mut scan);
        self.scan = scan;
        found
    }

    /// Iterate over the entries matching `prefix` in the active language,
    /// in scan order.
    pub fn matches(&mut self, prefix: &str) -> impl Iterator<Item = &NameEntry> + '_ {
        let key = fold(prefix);
        let set = &mut self.sets[self.language.slot()];
        let buckets = if prefix.is_empty() {
            set.sort_all(&self.objects);
            0..BUCKET_COUNT
        } else {
            let bucket = bucket_index(prefix);
            set.sorted(bucket, &self.objects);
            bucket..bucket + 1
        };
        let set = &*set;
        buckets.flat_map(move |index| {
            let bucket = set.get(index);
            let start = bucket.lower_bound(&key);
            let key = key.clone();
            bucket.entries()[start..]
                .iter()
                .take_while(move |entry| entry.has_prefix(&key))
        })
    }

    /// Iterate over all entries of the active language in scan order.
    pub fn entries(&mut self) -> impl Iterator<Item = &NameEntry> + '_ {
        self.matches("")
    }

    /// Resolve a name the way a user would type it.
    ///
    /// The placeholders `"star"` and `"nothing"` never resolve. Otherwise
    /// this is an exact match in the active language, falling back to the
    /// other language.
    pub fn lookup(&mut self, name: &str) -> Option<ObjectId> {
        if PLACEHOLDER_NAMES.contains(&name) {
            return None;
        }
        let language = self.language;
        self.find_in(language, name)
            .or_else(|| self.find_in(language.other(), name))
    }

    /// Change the language searches address.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::debug!(from = ?self.language, to = ?language, "switching name language");
        }
        self.language = language;
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of entries in the active language, duplicates included.
    pub fn count(&self) -> usize {
        self.count_in(self.language)
    }

    /// Number of entries in `language`, duplicates included.
    pub fn count_in(&self, language: Language) -> usize {
        self.counts[language.slot()]
    }

    /// Get the object for `id`, if it belongs to this index.
    pub fn get(&self, id: ObjectId) -> Option<&T> {
        self.objects.get(id.index())
    }

    /// Get the object for `id`.
    ///
    /// Panics if `id` does not belong to this index.
    pub fn object(&self, id: ObjectId) -> &T {
        &self.objects[id.index()]
    }

    /// Consume the index and return the objects it owns.
    ///
    /// Each object is released once, through its owning entry; shared
    /// entries release nothing. Objects come back in id order.
    pub fn into_objects(self) -> Vec<T> {
        let mut owned = HashSet::default();
        for set in &self.sets {
            for bucket in set.iter() {
                for entry in bucket.entries() {
                    if entry.ownership == Ownership::Owning {
                        let first_owner = owned.insert(entry.object);
                        debug_assert!(first_owner, "object {} owned twice", entry.object);
                    }
                }
            }
        }
        debug_assert_eq!(owned.len(), self.objects.len());
        self.objects
    }
}

impl<T: Named> Default for NameIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
