//! Result collection
//!
//! Keeps found words in ascending order as they are discovered.

/// Sorted, duplicate-free accumulator for the words of one solve
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    words: Vec<String>,
}

impl ResultCollector {
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Insert `word` at its sorted position
    ///
    /// Returns false, leaving the collector unchanged, if the word is
    /// already present.
    pub fn insert(&mut self, word: String) -> bool {
        match self.words.binary_search(&word) {
            Ok(_) => false,
            Err(position) => {
                self.words.insert(position, word);
                true
            }
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Hand over the collected words in ascending order
    #[must_use]
    pub fn export(self) -> Vec<String> {
        self.words
    }
}
