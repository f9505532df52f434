//! Property tests for the search engine.
//!
//! Invariants covered:
//! - Every reported word is in the vocabulary and at least three letters long.
//! - Results are strictly ascending, so no word is reported twice.
//! - Results agree with a brute-force path check of every vocabulary word.
//! - Consuming and shared solves agree, and fresh indices repeat results.
//! - Neighbor sets are symmetric with boundary-correct sizes.
use boggle_solver::core::{Board, DictionaryIndex};
use boggle_solver::solver::{Boggle, MIN_WORD_LEN, SharedIndex, Solver};
use proptest::prelude::*;

fn is_adjacent(board: &Board, a: usize, b: usize) -> bool {
    let (ra, ca) = board.position(a);
    let (rb, cb) = board.position(b);
    a != b && ra.abs_diff(rb) <= 1 && ca.abs_diff(cb) <= 1
}

fn trace_from(board: &Board, word: &[u8], cell: usize, depth: usize, used: &mut [bool]) -> bool {
    if depth + 1 == word.len() {
        return true;
    }
    for next in 0..board.len() {
        if !used[next] && is_adjacent(board, cell, next) && board.letter(next) == word[depth + 1] {
            used[next] = true;
            let found = trace_from(board, word, next, depth + 1, used);
            used[next] = false;
            if found {
                return true;
            }
        }
    }
    false
}

/// Exhaustive check that `word` can be traced on `board`
fn traceable(board: &Board, word: &str) -> bool {
    let word = word.as_bytes();
    let mut used = vec![false; board.len()];
    (0..board.len()).any(|start| {
        if board.letter(start) != word[0] {
            return false;
        }
        used[start] = true;
        let found = trace_from(board, word, start, 0, &mut used);
        used[start] = false;
        found
    })
}

fn board_strategy() -> impl Strategy<Value = Board> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(width, height)| {
        prop::collection::vec(0u8..5, width * height).prop_map(move |letters| {
            let cells = letters.into_iter().map(|l| b'a' + l).collect();
            Board::from_cells(width, height, cells).unwrap()
        })
    })
}

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,6}", 0..40).prop_map(|mut words| {
        words.sort();
        words.dedup();
        words
    })
}

#[test]
fn sample_board_scenario() {
    let vocabulary = [
        "bad", "bade", "bed", "boa", "box", "boy", "read", "rob", "robe", "yob", "yore",
    ];
    let boggle = Boggle::configure(vocabulary).unwrap();
    let found = boggle.solve_board(3, 3, "yoxrbaved");

    for word in ["bad", "boa", "box", "rob", "robe"] {
        assert_eq!(found.iter().filter(|w| *w == word).count(), 1);
    }
    assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn mismatched_board_yields_nothing() {
    let boggle = Boggle::configure(["abc", "bad"]).unwrap();
    assert!(boggle.solve_board(3, 3, "abcde").is_empty());
    assert!(boggle.try_solve_board(3, 3, "abcde").is_err());
}

#[test]
fn neighbor_counts_on_three_by_three_and_larger() {
    for (width, height) in [(3, 3), (4, 3), (3, 5), (6, 6)] {
        let board = Board::from_cells(width, height, vec![b'a'; width * height]).unwrap();
        for cell in 0..board.len() {
            let (row, col) = board.position(cell);
            let on_row_edge = row == 0 || row == height - 1;
            let on_col_edge = col == 0 || col == width - 1;
            let expected = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(board.neighbors(cell).count(), expected, "cell {cell} of {width}x{height}");
        }
    }
}

proptest! {
    #[test]
    fn results_are_sorted_valid_vocabulary_words(
        board in board_strategy(),
        vocabulary in vocabulary_strategy(),
    ) {
        let mut index = DictionaryIndex::build(&vocabulary).unwrap();
        let found = Solver::new().solve(&board, &mut index);

        for word in &found {
            prop_assert!(word.len() >= MIN_WORD_LEN);
            prop_assert!(vocabulary.binary_search(word).is_ok());
        }
        prop_assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn results_match_brute_force(
        board in board_strategy(),
        vocabulary in vocabulary_strategy(),
    ) {
        let mut index = DictionaryIndex::build(&vocabulary).unwrap();
        let found = Solver::new().solve(&board, &mut index);

        let expected: Vec<String> = vocabulary
            .iter()
            .filter(|w| w.len() >= MIN_WORD_LEN && traceable(&board, w))
            .cloned()
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn consuming_and_shared_solves_agree(
        board in board_strategy(),
        vocabulary in vocabulary_strategy(),
    ) {
        let index = DictionaryIndex::build(&vocabulary).unwrap();
        let solver = Solver::new();

        let shared = solver.solve(&board, &mut SharedIndex::new(&index));
        let first = solver.solve(&board, &mut DictionaryIndex::build(&vocabulary).unwrap());
        let second = solver.solve(&board, &mut DictionaryIndex::build(&vocabulary).unwrap());

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &shared);
    }

    #[test]
    fn neighbors_are_symmetric_and_in_bounds(width in 1usize..=8, height in 1usize..=8) {
        let board = Board::from_cells(width, height, vec![b'a'; width * height]).unwrap();

        for cell in 0..board.len() {
            let neighbors: Vec<usize> = board.neighbors(cell).collect();
            prop_assert!(neighbors.len() <= 8);
            for &next in &neighbors {
                prop_assert!(next < board.len());
                prop_assert!(is_adjacent(&board, cell, next));
                prop_assert!(board.neighbors(next).any(|back| back == cell));
            }
            let expected = (0..board.len()).filter(|&other| is_adjacent(&board, cell, other)).count();
            prop_assert_eq!(neighbors.len(), expected);
        }
    }

    #[test]
    fn single_cell_boards_find_nothing(
        letter in 0u8..26,
        vocabulary in vocabulary_strategy(),
    ) {
        let board = Board::from_cells(1, 1, vec![b'a' + letter]).unwrap();
        let mut index = DictionaryIndex::build(&vocabulary).unwrap();
        prop_assert!(Solver::new().solve(&board, &mut index).is_empty());
    }
}
