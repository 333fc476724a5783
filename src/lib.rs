//! # alien_order
//!
//! Recover the letter order of an unknown alphabet from a list of words
//! sorted in that alphabet.
//!
//! Adjacent words are compared at their first differing position, giving a
//! precedence edge between two characters. The characters are then
//! linearized with Kahn's algorithm; ties between ready characters go to
//! whichever was seen first in the input, so results are deterministic.
//!
//! ```
//! assert_eq!(alien_order::infer(&["wrt", "wrf", "er", "ett", "rftt"]).unwrap(), "wertf");
//! assert_eq!(alien_order::alien_order(&["z", "x", "z"]), "");
//! ```
//!
//! The [`sudoku`] module is an unrelated board validator that shares the
//! crate's error and logging conventions.
mod error;
mod precedence;
pub mod sudoku;

pub use error::{OrderError, SudokuError};
pub use precedence::{OrderReport, Precedence};

/// Infer the alphabet order, or say why the words admit none.
///
/// An empty list gives an empty order.
pub fn infer<S: AsRef<str>>(words: &[S]) -> Result<String, OrderError> {
    Precedence::from_words(words)?.topo_one()
}

/// Like [`infer`], but any failure is an empty string.
pub fn alien_order<S: AsRef<str>>(words: &[S]) -> String {
    infer(words).unwrap_or_default()
}
