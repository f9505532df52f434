//! Board solving command
//!
//! Validates a board request, solves it and times the search.

use crate::core::dice::roll_board;
use crate::core::{Board, BoardError};
use crate::solver::Boggle;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Configuration for solving a board
pub struct SolveConfig {
    pub letters: String,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl SolveConfig {
    /// A board whose dimensions are inferred from the letter count
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub const fn with_dimensions(mut self, width: Option<usize>, height: Option<usize>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Resolve the board dimensions
    ///
    /// With neither dimension given the board must be square. With one given,
    /// the other is derived from the letter count.
    ///
    /// # Errors
    /// Returns `BoardError::SizeMismatch` when the letter count fits no
    /// board of the requested shape.
    pub fn dimensions(&self) -> Result<(usize, usize), BoardError> {
        let count = self.letters.chars().count();

        match (self.width, self.height) {
            (Some(width), Some(height)) => Ok((width, height)),
            (Some(width), None) => Ok((width, count.checked_div(width).unwrap_or(0))),
            (None, Some(height)) => Ok((count.checked_div(height).unwrap_or(0), height)),
            (None, None) => {
                let side = count.isqrt();
                if side * side == count {
                    Ok((side, side))
                } else {
                    Err(BoardError::SizeMismatch {
                        expected: (side + 1) * (side + 1),
                        actual: count,
                    })
                }
            }
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub words: Vec<String>,
    pub duration: Duration,
}

impl SolveResult {
    /// The longest word found, the alphabetically first on ties
    #[must_use]
    pub fn longest_word(&self) -> Option<&str> {
        self.words
            .iter()
            .rev()
            .max_by_key(|w| w.len())
            .map(String::as_str)
    }
}

/// Solve the board described by `config`
///
/// # Errors
///
/// Returns an error if the dimensions cannot be resolved or the letters do
/// not form a valid board.
pub fn solve_board(config: &SolveConfig, boggle: &Boggle) -> Result<SolveResult, BoardError> {
    let (width, height) = config.dimensions()?;
    let board = Board::new(width, height, &config.letters)?;
    Ok(solve_timed(board, boggle))
}

/// Roll a random board from the classic dice and solve it
///
/// The same `seed` always produces the same board.
///
/// # Errors
///
/// Returns an error if either dimension is zero.
pub fn solve_random(
    width: usize,
    height: usize,
    seed: Option<u64>,
    boggle: &Boggle,
) -> Result<SolveResult, BoardError> {
    let board = match seed {
        Some(seed) => roll_board(width, height, &mut StdRng::seed_from_u64(seed))?,
        None => roll_board(width, height, &mut rand::rng())?,
    };
    Ok(solve_timed(board, boggle))
}

fn solve_timed(board: Board, boggle: &Boggle) -> SolveResult {
    let start = Instant::now();
    let words = boggle.solve(&board);
    SolveResult {
        board,
        words,
        duration: start.elapsed(),
    }
}
