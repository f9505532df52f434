//! Boggle Solver
//!
//! Finds every dictionary word that can be traced on a Boggle board through
//! adjacent, non-repeating cells, using a prefix-pruned depth-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::solver::Boggle;
//!
//! let boggle = Boggle::configure(["bad", "boa", "box", "rob", "robe"]).unwrap();
//!
//! // 3x3 board, row-major: yox / rba / ved
//! let words = boggle.solve_board(3, 3, "yoxrbaved");
//! assert_eq!(words, vec!["bad", "boa", "box", "rob", "robe"]);
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
