//! Boggle board representation
//!
//! A Board is an immutable row-major grid of single-byte letters.

use std::fmt;

/// Relative (row, column) offsets of the eight surrounding cells, in the
/// order they are visited: top row, middle row, bottom row.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of lowercase ASCII letters
///
/// Cells are stored row-major: the cell at `(row, col)` lives at index
/// `row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

/// Error type for invalid boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is zero
    EmptyDimension { width: usize, height: usize },
    /// `width * height` does not fit in `usize`
    TooLarge { width: usize, height: usize },
    /// Letter count does not equal `width * height`
    SizeMismatch { expected: usize, actual: usize },
    /// A cell holds a character outside single-byte ASCII
    InvalidLetter { position: usize, letter: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { width, height } => {
                write!(f, "Board dimensions must be positive, got {width}x{height}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "Board of {width}x{height} cells is too large")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Number of letters does not match board size: expected {expected}, got {actual}"
                )
            }
            Self::InvalidLetter { position, letter } => {
                write!(f, "Invalid letter '{letter}' at position {position}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Create a board from dimensions and a row-major letter string
    ///
    /// Letters are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - Either dimension is zero
    /// - `width * height` overflows
    /// - `letters` does not contain exactly `width * height` characters
    /// - Any letter is not ASCII
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, BoardError};
    ///
    /// let board = Board::new(3, 3, "yoxrbaved").unwrap();
    /// assert_eq!(board.letter(board.index_of(1, 1)), b'b');
    ///
    /// assert_eq!(
    ///     Board::new(3, 3, "abcde"),
    ///     Err(BoardError::SizeMismatch { expected: 9, actual: 5 })
    /// );
    /// ```
    pub fn new(width: usize, height: usize, letters: &str) -> Result<Self, BoardError> {
        let expected = Self::checked_size(width, height)?;

        let actual = letters.chars().count();
        if actual != expected {
            return Err(BoardError::SizeMismatch { expected, actual });
        }

        if let Some((position, letter)) = letters.chars().enumerate().find(|(_, c)| !c.is_ascii())
        {
            return Err(BoardError::InvalidLetter { position, letter });
        }

        Ok(Self {
            width,
            height,
            cells: letters.bytes().map(|b| b.to_ascii_lowercase()).collect(),
        })
    }

    /// Create a board from raw row-major cell bytes
    ///
    /// # Errors
    /// Same conditions as [`Board::new`].
    pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, BoardError> {
        let expected = Self::checked_size(width, height)?;

        if cells.len() != expected {
            return Err(BoardError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        if let Some(position) = cells.iter().position(|b| !b.is_ascii()) {
            return Err(BoardError::InvalidLetter {
                position,
                letter: char::from(cells[position]),
            });
        }

        Ok(Self {
            width,
            height,
            cells: cells.to_ascii_lowercase(),
        })
    }

    /// Cell count of a `width x height` board
    pub(super) fn checked_size(width: usize, height: usize) -> Result<usize, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimension { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed board; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The letter at a cell index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Row-major index of `(row, col)`
    #[inline]
    #[must_use]
    pub const fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// `(row, col)` of a row-major index
    #[inline]
    #[must_use]
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Indices of the cells adjacent to `index`, diagonals included
    ///
    /// Neighbors are clipped at the board edges; nothing wraps around.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    ///
    /// let board = Board::new(3, 3, "abcdefghi").unwrap();
    /// let corner: Vec<usize> = board.neighbors(0).collect();
    /// assert_eq!(corner, vec![1, 3, 4]);
    /// assert_eq!(board.neighbors(4).count(), 8);
    /// ```
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = self.position(index);

        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then(|| self.index_of(r, c))
        })
    }

    /// Iterate over the rows as letter slices
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &letter in row {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}
