//! Core domain types for Boggle
//!
//! The board grid and the dictionary index. Both validate their inputs on
//! construction, so the search never has to.

mod board;
pub mod dice;
mod dictionary;

pub use board::{Board, BoardError};
pub use dictionary::{ConfigurationError, DictionaryIndex};
