//! Configure-then-solve entry point
//!
//! Wraps a validated vocabulary and solves boards against it without ever
//! mutating it, so one instance answers any number of boards.

use super::engine::Solver;
use super::source::SharedIndex;
use crate::core::{Board, BoardError, ConfigurationError, DictionaryIndex};
use log::warn;

/// A configured Boggle solver
#[derive(Debug, Clone)]
pub struct Boggle {
    index: DictionaryIndex,
    solver: Solver,
}

impl Boggle {
    /// Configure the legal words from an ascending vocabulary of lowercase words
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the vocabulary is unsorted, has
    /// duplicates, or has empty or non-lowercase words. No solver is created
    /// in that case.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::solver::Boggle;
    ///
    /// let boggle = Boggle::configure(["bad", "boa", "box", "rob", "robe"]).unwrap();
    /// assert_eq!(
    ///     boggle.solve_board(3, 3, "yoxrbaved"),
    ///     vec!["bad", "boa", "box", "rob", "robe"]
    /// );
    ///
    /// // Wrong letter count: reported, nothing solved
    /// assert!(boggle.solve_board(3, 3, "abcde").is_empty());
    /// ```
    pub fn configure<I, S>(vocabulary: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_index(DictionaryIndex::build(vocabulary)?))
    }

    /// Wrap an already built index
    #[must_use]
    pub fn from_index(index: DictionaryIndex) -> Self {
        Self {
            index,
            solver: Solver::new(),
        }
    }

    /// Replace the solver used for every board
    #[must_use]
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    #[inline]
    #[must_use]
    pub const fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Find all words on a `width x height` board of row-major `letters`
    ///
    /// An invalid board is logged and yields an empty result; use
    /// [`try_solve_board`](Self::try_solve_board) to get the error itself.
    #[must_use]
    pub fn solve_board(&self, width: usize, height: usize, letters: &str) -> Vec<String> {
        self.try_solve_board(width, height, letters)
            .unwrap_or_else(|e| {
                warn!("not solving board: {e}");
                Vec::new()
            })
    }

    /// Find all words on a board, reporting invalid input as an error
    ///
    /// # Errors
    /// Returns `BoardError::SizeMismatch` when `letters` does not hold exactly
    /// `width * height` characters, and the other `BoardError` variants for
    /// zero dimensions or non-ASCII letters.
    pub fn try_solve_board(
        &self,
        width: usize,
        height: usize,
        letters: &str,
    ) -> Result<Vec<String>, BoardError> {
        let board = Board::new(width, height, letters)?;
        Ok(self.solve(&board))
    }

    /// Find all words on an already validated board
    #[must_use]
    pub fn solve(&self, board: &Board) -> Vec<String> {
        self.solver.solve(board, &mut SharedIndex::new(&self.index))
    }
}
