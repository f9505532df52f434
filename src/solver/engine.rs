//! Main Boggle search engine
//!
//! Depth-first search over board paths with prefix pruning.

use super::collector::ResultCollector;
use super::source::WordSource;
use crate::core::Board;
use log::{debug, trace};
use std::ops::{ControlFlow, Deref, DerefMut};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Shortest word reported under standard rules
pub const MIN_WORD_LEN: usize = 3;

/// Main Boggle solver
///
/// Holds only configuration. All per-solve working state lives in a walk
/// created by each call, so one solver can serve many boards.
#[derive(Debug, Clone)]
pub struct Solver {
    min_word_len: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_word_len: MIN_WORD_LEN,
            cancel: None,
        }
    }

    /// Report only words of at least `len` letters (never less than one)
    #[must_use]
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len.max(1);
        self
    }

    /// Stop early once `flag` is set
    ///
    /// The flag is checked between starting cells; a cancelled solve returns
    /// the words found so far.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[inline]
    #[must_use]
    pub const fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    /// Find every word of `words` that can be traced on `board`
    ///
    /// Returns the words in ascending order, each once. When `words` is a
    /// [`DictionaryIndex`](crate::core::DictionaryIndex) every found word is
    /// consumed from it.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, DictionaryIndex};
    /// use boggle_solver::solver::Solver;
    ///
    /// let board = Board::new(3, 3, "yoxrbaved").unwrap();
    /// let mut index = DictionaryIndex::build(["bad", "boa", "box", "rob", "robe", "zap"]).unwrap();
    ///
    /// let found = Solver::new().solve(&board, &mut index);
    /// assert_eq!(found, vec!["bad", "boa", "box", "rob", "robe"]);
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn solve<W: WordSource>(&self, board: &Board, words: &mut W) -> Vec<String> {
        let start = Instant::now();
        let mut walk = Walk {
            board,
            words,
            min_word_len: self.min_word_len,
            leading: 0,
            used: vec![false; board.len()],
            candidate: Vec::with_capacity(board.len()),
            found: ResultCollector::new(),
        };

        for cell in 0..board.len() {
            if self.is_cancelled() {
                debug!("solve cancelled before starting cell {cell}");
                break;
            }
            walk.start_from(cell);
        }

        let found = walk.found.export();
        debug!(
            "solved {}x{} board: {} words in {:.2?}",
            board.width(),
            board.height(),
            found.len(),
            start.elapsed()
        );
        found
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Working state of one solve
///
/// Invariant: `used[i]` is true exactly for the cells on the current path, and
/// `candidate` holds their letters in path order.
struct Walk<'s, W> {
    board: &'s Board,
    words: &'s mut W,
    min_word_len: usize,
    leading: u8,
    used: Vec<bool>,
    candidate: Vec<u8>,
    found: ResultCollector,
}

impl<'s, W: WordSource> Walk<'s, W> {
    fn start_from(&mut self, cell: usize) {
        debug_assert!(self.candidate.is_empty());
        debug_assert!(self.used.iter().all(|&used| !used));

        let leading = self.board.letter(cell);
        if self.words.is_exhausted(leading) {
            trace!("skipping cell {cell}: no words left starting with '{}'", char::from(leading));
            return;
        }
        self.leading = leading;

        let mut step = self.enter(cell);
        // Break means the bucket emptied; later cells with this letter skip it
        if step.report().is_break() || step.extend(cell).is_break() {
            trace!("exhausted all words starting with '{}'", char::from(leading));
        }
    }

    /// Mark `cell` used and append its letter until the returned step drops
    fn enter(&mut self, cell: usize) -> Step<'_, 's, W> {
        self.used[cell] = true;
        self.candidate.push(self.board.letter(cell));
        Step { walk: self, cell }
    }

    /// Try every unused neighbor of `from` as the next letter
    fn extend(&mut self, from: usize) -> ControlFlow<()> {
        let board = self.board;
        for next in board.neighbors(from) {
            if self.used[next] {
                continue;
            }
            let mut step = self.enter(next);
            step.visit(next)?;
        }
        ControlFlow::Continue(())
    }

    /// Handle a freshly appended cell: prune, report, then go deeper
    fn visit(&mut self, cell: usize) -> ControlFlow<()> {
        if !self.words.has_prefix(self.leading, &self.candidate) {
            return ControlFlow::Continue(());
        }

        self.report()?;
        self.extend(cell)
    }

    /// Claim the current path as a word if it is long enough and listed
    fn report(&mut self) -> ControlFlow<()> {
        if self.candidate.len() < self.min_word_len {
            return ControlFlow::Continue(());
        }
        if let Some(word) = self.words.claim(self.leading, &self.candidate) {
            self.found.insert(word);
            if self.words.is_exhausted(self.leading) {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}

/// A cell held on the current path
///
/// Dropping the step pops its letter and releases the cell, on every exit
/// path out of the recursion.
struct Step<'w, 's, W> {
    walk: &'w mut Walk<'s, W>,
    cell: usize,
}

impl<'s, W> Deref for Step<'_, 's, W> {
    type Target = Walk<'s, W>;

    fn deref(&self) -> &Self::Target {
        self.walk
    }
}

impl<W> DerefMut for Step<'_, '_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.walk
    }
}

impl<W> Drop for Step<'_, '_, W> {
    fn drop(&mut self) {
        self.walk.candidate.pop();
        self.walk.used[self.cell] = false;
    }
}
