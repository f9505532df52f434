//! Word lists for Boggle solving
//!
//! An embedded default vocabulary plus loading of custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
