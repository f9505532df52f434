//! Random board generation
//!
//! Boards are rolled from the 16 dice of the classic 4x4 game. Larger boards
//! reuse the dice set as many times as needed.

use super::{Board, BoardError};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Faces of the 16 classic Boggle dice
///
/// The physical "Qu" face is represented by its single letter `q`.
pub const CLASSIC_DICE: [&str; 16] = [
    "aaeegn", "abbjoo", "achops", "affkps", "aoottw", "cimotu", "deilrx", "delrvy", "distty",
    "eeghnw", "eeinsu", "ehrtvw", "eiosst", "elrtty", "himnqu", "hlnnrz",
];

/// Roll a `width x height` board from the classic dice
///
/// Dice are dealt to cells in a random order, then each die shows a random face.
///
/// # Errors
/// Returns `BoardError::EmptyDimension` if either dimension is zero, or
/// `BoardError::TooLarge` if the cell count overflows.
///
/// # Examples
/// ```
/// use boggle_solver::core::dice::roll_board;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let board = roll_board(4, 4, &mut rng).unwrap();
/// assert_eq!(board.len(), 16);
/// ```
pub fn roll_board<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let size = Board::checked_size(width, height)?;
    let mut dice: Vec<&str> = CLASSIC_DICE.iter().copied().cycle().take(size).collect();
    dice.shuffle(rng);

    let cells = dice
        .iter()
        .map(|die| die.as_bytes().choose(rng).copied().unwrap_or(b'e'))
        .collect();

    Board::from_cells(width, height, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn classic_dice_have_six_lowercase_faces() {
        for die in CLASSIC_DICE {
            assert_eq!(die.len(), 6, "Die '{die}' does not have 6 faces");
            assert!(die.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn rolled_board_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = roll_board(5, 3, &mut rng).unwrap();
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 3);
        assert_eq!(board.len(), 15);
    }

    #[test]
    fn every_cell_shows_a_die_face() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = roll_board(4, 4, &mut rng).unwrap();

        for &letter in board.cells() {
            assert!(
                CLASSIC_DICE.iter().any(|die| die.as_bytes().contains(&letter)),
                "Letter '{}' is on no die",
                char::from(letter)
            );
        }
    }

    #[test]
    fn same_seed_same_board() {
        let a = roll_board(4, 4, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = roll_board(4, 4, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn large_board_reuses_dice() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = roll_board(6, 6, &mut rng).unwrap();
        assert_eq!(board.len(), 36);
    }

    #[test]
    fn zero_dimension_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(roll_board(0, 4, &mut rng).is_err());
    }

    #[test]
    fn overflowing_size_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let size = usize::MAX / 2 + 1;
        assert_eq!(
            roll_board(size, size, &mut rng),
            Err(BoardError::TooLarge {
                width: size,
                height: size
            })
        );
    }
}
