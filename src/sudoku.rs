//! 9x9 Sudoku validation with optional custom zones.
//!
//! A board is valid when no row, column, 3x3 box or custom zone repeats a
//! non-blank character. Completeness is not checked; blanks are ignored.

use serde::Serialize;
use tracing::debug;

use crate::error::SudokuError;

/// Marker for an empty cell.
pub const BLANK: char = '.';

/// Side length of the board.
pub const SIZE: usize = 9;

/// A custom zone: exactly nine `(row, col)` coordinates.
pub type Zone = Vec<(usize, usize)>;

/// One constrained group of nine cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum Group {
    Row(usize),
    Column(usize),
    /// Boxes are numbered left to right, top to bottom.
    Box(usize),
    /// Index into the zone list passed by the caller.
    Zone(usize),
}

/// A character repeated within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub group: Group,
    pub value: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board([[char; SIZE]; SIZE]);

impl Board {
    #[must_use]
    pub const fn new(cells: [[char; SIZE]; SIZE]) -> Self {
        Self(cells)
    }

    /// Builds a board from nine rows of nine one-character strings.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, SudokuError> {
        if rows.len() != SIZE {
            return Err(SudokuError::RowCount { len: rows.len() });
        }
        let mut cells = [[BLANK; SIZE]; SIZE];
        for (row, values) in rows.iter().enumerate() {
            if values.len() != SIZE {
                return Err(SudokuError::Dimensions { row, len: values.len() });
            }
            for (col, value) in values.iter().enumerate() {
                let value = value.as_ref();
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => cells[row][col] = c,
                    _ => {
                        return Err(SudokuError::Cell {
                            row,
                            col,
                            value: value.to_owned(),
                        })
                    }
                }
            }
        }
        Ok(Self(cells))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Whether every row, column, box and zone is free of repeats.
    ///
    /// # Errors
    ///
    /// `SudokuError::ZoneSize` or `SudokuError::ZoneOutOfBounds` if any zone
    /// is malformed. Zones are checked before any cell is read.
    pub fn validate(&self, zones: &[Zone]) -> Result<bool, SudokuError> {
        check_zones(zones)?;
        let valid = self
            .groups(zones)
            .all(|(_, cells)| duplicates(&cells).is_empty());
        Ok(valid)
    }

    /// Every repeated character, grouped in check order: rows, columns,
    /// boxes, zones.
    pub fn conflicts(&self, zones: &[Zone]) -> Result<Vec<Conflict>, SudokuError> {
        check_zones(zones)?;
        let conflicts: Vec<Conflict> = self
            .groups(zones)
            .flat_map(|(group, cells)| {
                duplicates(&cells)
                    .into_iter()
                    .map(move |value| Conflict { group, value })
            })
            .collect();
        debug!(count = conflicts.len(), "board conflicts");
        Ok(conflicts)
    }

    fn groups<'a>(&'a self, zones: &'a [Zone]) -> impl Iterator<Item = (Group, Vec<char>)> + 'a {
        let rows = (0..SIZE).map(move |r| (Group::Row(r), self.0[r].to_vec()));
        let cols = (0..SIZE).map(move |c| {
            let cells: Vec<char> = (0..SIZE).map(|r| self.0[r][c]).collect();
            (Group::Column(c), cells)
        });
        let boxes = (0..SIZE).map(move |b| {
            let (top, left) = (b / 3 * 3, b % 3 * 3);
            let cells: Vec<char> = (top..top + 3)
                .flat_map(|r| (left..left + 3).map(move |c| (r, c)))
                .map(|(r, c)| self.0[r][c])
                .collect();
            (Group::Box(b), cells)
        });
        let custom = zones.iter().enumerate().map(move |(z, zone)| {
            let cells: Vec<char> = zone.iter().map(|&(r, c)| self.0[r][c]).collect();
            (Group::Zone(z), cells)
        });
        rows.chain(cols).chain(boxes).chain(custom)
    }
}

impl From<[[char; SIZE]; SIZE]> for Board {
    fn from(cells: [[char; SIZE]; SIZE]) -> Self {
        Self::new(cells)
    }
}

fn check_zones(zones: &[Zone]) -> Result<(), SudokuError> {
    for (zone, cells) in zones.iter().enumerate() {
        if cells.len() != SIZE {
            return Err(SudokuError::ZoneSize { zone, len: cells.len() });
        }
        if let Some(&(row, col)) = cells.iter().find(|&&(r, c)| r >= SIZE || c >= SIZE) {
            return Err(SudokuError::ZoneOutOfBounds { zone, row, col });
        }
    }
    Ok(())
}

/// Distinct non-blank characters seen more than once, in first-repeat order.
fn duplicates(cells: &[char]) -> Vec<char> {
    let mut seen = Vec::with_capacity(cells.len());
    let mut dups = Vec::new();
    for &c in cells.iter().filter(|&&c| c != BLANK) {
        if seen.contains(&c) {
            if !dups.contains(&c) {
                dups.push(c);
            }
        } else {
            seen.push(c);
        }
    }
    dups
}
