//! Dictionary index for prefix pruning
//!
//! The vocabulary is partitioned by leading letter, each partition kept in
//! ascending order so prefix and exact-match queries are ordered searches.

use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;

/// Legal words grouped into sorted buckets by their first letter
///
/// Buckets only ever shrink. When [`DictionaryIndex::try_consume_exact`]
/// removes the last word of a bucket the bucket itself is dropped, so an
/// absent letter means no remaining word can start with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryIndex {
    buckets: FxHashMap<u8, Vec<String>>,
    word_count: usize,
}

/// Error type for vocabularies that violate the build preconditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An empty string at the given position
    EmptyWord { position: usize },
    /// A word containing anything other than `a..=z`
    InvalidCharacters { word: String },
    /// `word` sorts before the word preceding it
    Unsorted { previous: String, word: String },
    /// The same word appears twice in a row
    Duplicate { word: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord { position } => {
                write!(f, "Vocabulary contains an empty word at position {position}")
            }
            Self::InvalidCharacters { word } => {
                write!(f, "Word '{word}' must contain only lowercase ASCII letters")
            }
            Self::Unsorted { previous, word } => {
                write!(
                    f,
                    "Vocabulary is not sorted: '{word}' comes after '{previous}'"
                )
            }
            Self::Duplicate { word } => write!(f, "Vocabulary contains '{word}' twice"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl DictionaryIndex {
    /// Build an index from an ascending vocabulary of lowercase words
    ///
    /// Input order is trusted, not re-sorted, so it is checked instead.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if:
    /// - A word is empty
    /// - A word contains characters other than `a..=z`
    /// - The vocabulary is not strictly ascending
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build(["bad", "bed", "rob"]).unwrap();
    /// assert!(index.has_prefix(b'b', b"be"));
    /// assert!(index.is_exhausted(b'z'));
    ///
    /// assert!(DictionaryIndex::build(["rob", "bad"]).is_err());
    /// ```
    pub fn build<I, S>(vocabulary: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = Vec::new();

        for (position, word) in vocabulary.into_iter().enumerate() {
            let word = word.as_ref();

            if word.is_empty() {
                return Err(ConfigurationError::EmptyWord { position });
            }
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(ConfigurationError::InvalidCharacters {
                    word: word.to_string(),
                });
            }
            words.push(word.to_string());
        }

        for pair in words.windows(2) {
            let (previous, word) = (&pair[0], &pair[1]);
            if previous == word {
                return Err(ConfigurationError::Duplicate { word: word.clone() });
            }
            if previous > word {
                return Err(ConfigurationError::Unsorted {
                    previous: previous.clone(),
                    word: word.clone(),
                });
            }
        }

        let mut buckets: FxHashMap<u8, Vec<String>> = FxHashMap::default();
        let word_count = words.len();
        for word in words {
            // Ascending input keeps each bucket ascending as we append
            buckets.entry(word.as_bytes()[0]).or_default().push(word);
        }

        debug!(
            "built dictionary index: {word_count} words in {} buckets",
            buckets.len()
        );

        Ok(Self {
            buckets,
            word_count,
        })
    }

    /// Build an index from words in any order, sorting and deduplicating first
    ///
    /// # Errors
    /// Returns `ConfigurationError` for empty or non-lowercase words.
    pub fn from_unsorted<I, S>(vocabulary: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = vocabulary
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self::build(words)
    }

    /// Total number of words still in the index
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The sorted words starting with `leading`, empty if none remain
    #[must_use]
    pub fn bucket(&self, leading: u8) -> &[String] {
        self.buckets.get(&leading).map_or(&[], Vec::as_slice)
    }

    /// True if no word starting with `leading` remains
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self, leading: u8) -> bool {
        !self.buckets.contains_key(&leading)
    }

    /// True if some word in the `leading` bucket starts with `prefix`
    ///
    /// Words sharing a prefix are contiguous in a sorted bucket and the
    /// smallest of them is the first word not less than the prefix.
    #[must_use]
    pub fn has_prefix(&self, leading: u8, prefix: &[u8]) -> bool {
        let bucket = self.bucket(leading);
        let first = bucket.partition_point(|w| w.as_bytes() < prefix);
        bucket
            .get(first)
            .is_some_and(|w| w.as_bytes().starts_with(prefix))
    }

    /// True if `word` is a full entry in the `leading` bucket
    #[must_use]
    pub fn contains(&self, leading: u8, word: &[u8]) -> bool {
        self.find(leading, word).is_some()
    }

    fn find(&self, leading: u8, word: &[u8]) -> Option<usize> {
        self.bucket(leading)
            .binary_search_by(|w| w.as_bytes().cmp(word))
            .ok()
    }

    /// Remove `word` from the index if it is a full entry
    ///
    /// Returns whether a word was removed. Removing the last word of a bucket
    /// drops the bucket, after which [`is_exhausted`](Self::is_exhausted)
    /// reports true for that letter.
    pub fn try_consume_exact(&mut self, leading: u8, word: &[u8]) -> bool {
        self.take(leading, word).is_some()
    }

    /// Remove and return `word` if it is a full entry
    pub(crate) fn take(&mut self, leading: u8, word: &[u8]) -> Option<String> {
        let position = self.find(leading, word)?;
        let bucket = self.buckets.get_mut(&leading)?;
        let taken = bucket.remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&leading);
        }
        self.word_count -= 1;
        Some(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> DictionaryIndex {
        DictionaryIndex::build([
            "bad", "bade", "bed", "boa", "box", "boy", "read", "rob", "robe", "yob", "yore",
        ])
        .unwrap()
    }

    #[test]
    fn build_groups_by_leading_letter() {
        let index = sample_index();
        assert_eq!(index.len(), 11);
        assert_eq!(index.bucket(b'b'), &["bad", "bade", "bed", "boa", "box", "boy"]);
        assert_eq!(index.bucket(b'r'), &["read", "rob", "robe"]);
        assert_eq!(index.bucket(b'y'), &["yob", "yore"]);
        assert!(index.bucket(b'a').is_empty());
    }

    #[test]
    fn build_empty_vocabulary() {
        let index = DictionaryIndex::build(Vec::<String>::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.is_exhausted(b'a'));
    }

    #[test]
    fn build_rejects_empty_word() {
        assert_eq!(
            DictionaryIndex::build(["bad", ""]),
            Err(ConfigurationError::EmptyWord { position: 1 })
        );
    }

    #[test]
    fn build_rejects_invalid_characters() {
        assert!(matches!(
            DictionaryIndex::build(["Bad"]),
            Err(ConfigurationError::InvalidCharacters { .. })
        ));
        assert!(DictionaryIndex::build(["b4d"]).is_err());
        assert!(DictionaryIndex::build(["don't"]).is_err());
    }

    #[test]
    fn build_rejects_unsorted() {
        assert_eq!(
            DictionaryIndex::build(["robe", "robbed"]),
            Err(ConfigurationError::Unsorted {
                previous: "robe".to_string(),
                word: "robbed".to_string()
            })
        );
    }

    #[test]
    fn build_rejects_duplicates() {
        assert_eq!(
            DictionaryIndex::build(["robed", "robed"]),
            Err(ConfigurationError::Duplicate {
                word: "robed".to_string()
            })
        );
    }

    #[test]
    fn from_unsorted_sorts_and_dedups() {
        let index = DictionaryIndex::from_unsorted(["robed", "robbed", "robe", "robed"]).unwrap();
        assert_eq!(index.bucket(b'r'), &["robbed", "robe", "robed"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn has_prefix_matches_initial_substrings() {
        let index = sample_index();
        assert!(index.has_prefix(b'b', b"b"));
        assert!(index.has_prefix(b'b', b"ba"));
        assert!(index.has_prefix(b'b', b"bad"));
        assert!(index.has_prefix(b'b', b"bade"));
        assert!(index.has_prefix(b'b', b"bo"));
        assert!(!index.has_prefix(b'b', b"bb"));
        assert!(!index.has_prefix(b'b', b"badee"));
        assert!(!index.has_prefix(b'b', b"bz"));
        assert!(!index.has_prefix(b'x', b"x"));
    }

    #[test]
    fn has_prefix_at_bucket_edges() {
        let index = sample_index();
        // First and last entries of a bucket
        assert!(index.has_prefix(b'b', b"ba"));
        assert!(index.has_prefix(b'b', b"boy"));
        // Before the first and after the last entry
        assert!(!index.has_prefix(b'b', b"aa"));
        assert!(!index.has_prefix(b'b', b"bp"));
    }

    #[test]
    fn contains_requires_full_word() {
        let index = sample_index();
        assert!(index.contains(b'r', b"rob"));
        assert!(index.contains(b'r', b"robe"));
        assert!(!index.contains(b'r', b"ro"));
        assert!(!index.contains(b'r', b"robed"));
    }

    #[test]
    fn consume_removes_only_that_word() {
        let mut index = sample_index();
        assert!(index.try_consume_exact(b'r', b"rob"));
        assert_eq!(index.bucket(b'r'), &["read", "robe"]);
        assert_eq!(index.len(), 10);

        // Longer words sharing the prefix stay reachable
        assert!(index.has_prefix(b'r', b"rob"));
        assert!(!index.try_consume_exact(b'r', b"rob"));
    }

    #[test]
    fn consume_missing_word_leaves_index_unchanged() {
        let mut index = sample_index();
        let before = index.clone();
        assert!(!index.try_consume_exact(b'b', b"bat"));
        assert!(!index.try_consume_exact(b'q', b"quit"));
        assert_eq!(index, before);
    }

    #[test]
    fn consuming_last_word_exhausts_bucket() {
        let mut index = sample_index();
        assert!(!index.is_exhausted(b'y'));
        assert!(index.try_consume_exact(b'y', b"yob"));
        assert!(!index.is_exhausted(b'y'));
        assert!(index.try_consume_exact(b'y', b"yore"));
        assert!(index.is_exhausted(b'y'));
        assert!(!index.has_prefix(b'y', b"y"));
    }
}
