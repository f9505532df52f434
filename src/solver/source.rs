//! Word sources consulted by the search
//!
//! Defines the `WordSource` trait and its two implementations: the consuming
//! dictionary index and a non-destructive shared view of one.

use crate::core::DictionaryIndex;

/// The dictionary queries the search needs at every path extension
pub trait WordSource {
    /// True if no word starting with `leading` can still be reported
    fn is_exhausted(&self, leading: u8) -> bool;

    /// True if some word starting with `leading` begins with `prefix`
    fn has_prefix(&self, leading: u8, prefix: &[u8]) -> bool;

    /// Claim `word` as found, returning it if it is a dictionary entry
    ///
    /// A consuming source removes the word so it can never be claimed again.
    fn claim(&mut self, leading: u8, word: &[u8]) -> Option<String>;
}

/// Consume-once semantics: each claimed word leaves the index for good
impl WordSource for DictionaryIndex {
    #[inline]
    fn is_exhausted(&self, leading: u8) -> bool {
        Self::is_exhausted(self, leading)
    }

    #[inline]
    fn has_prefix(&self, leading: u8, prefix: &[u8]) -> bool {
        Self::has_prefix(self, leading, prefix)
    }

    fn claim(&mut self, leading: u8, word: &[u8]) -> Option<String> {
        self.take(leading, word)
    }
}

/// Read-only view of a dictionary index
///
/// Claims never modify the index, so one index can serve any number of
/// sequential or parallel solves. The result collector drops repeats instead.
#[derive(Debug, Clone, Copy)]
pub struct SharedIndex<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> SharedIndex<'a> {
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }
}

impl WordSource for SharedIndex<'_> {
    #[inline]
    fn is_exhausted(&self, leading: u8) -> bool {
        self.index.is_exhausted(leading)
    }

    #[inline]
    fn has_prefix(&self, leading: u8, prefix: &[u8]) -> bool {
        self.index.has_prefix(leading, prefix)
    }

    fn claim(&mut self, leading: u8, word: &[u8]) -> Option<String> {
        self.index
            .contains(leading, word)
            .then(|| String::from_utf8_lossy(word).into_owned())
    }
}
