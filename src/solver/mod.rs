//! Boggle search
//!
//! The depth-first search engine, the word sources it consults, and the
//! collector that orders its results.

mod boggle;
mod collector;
mod engine;
mod source;

pub use boggle::Boggle;
pub use collector::ResultCollector;
pub use engine::{MIN_WORD_LEN, Solver};
pub use source::{SharedIndex, WordSource};
