//! Error types for order inference and board validation.

use thiserror::Error;

/// Reasons a word list cannot yield an ordering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A later, shorter word is a prefix of the word before it.
    #[error("contradictory input: {later:?} (word {}) is a prefix of the preceding {earlier:?}", .index + 2)]
    ContradictoryPrefix {
        /// Zero-based position of `earlier`; `later` follows it.
        index: usize,
        earlier: String,
        later: String,
    },

    /// The precedence graph has at least one cycle.
    #[error("cycle detected among {cycles:?} ({} characters could not be placed)", .unplaced.len())]
    CyclicConstraints {
        /// Characters the sort never reached, in discovery order.
        unplaced: Vec<char>,
        /// Strongly connected components with more than one member.
        cycles: Vec<Vec<char>>,
    },
}

/// Structural problems with a Sudoku board or its custom zones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SudokuError {
    #[error("board must have 9 rows, got {len}")]
    RowCount { len: usize },

    #[error("board rows must have 9 cells, row {row} has {len}")]
    Dimensions { row: usize, len: usize },

    #[error("cell ({row}, {col}) must be a single character, got {value:?}")]
    Cell { row: usize, col: usize, value: String },

    #[error("each custom zone must have exactly 9 cells, zone {zone} has {len}")]
    ZoneSize { zone: usize, len: usize },

    #[error("zone {zone} references ({row}, {col}), outside the 9x9 board")]
    ZoneOutOfBounds { zone: usize, row: usize, col: usize },
}
