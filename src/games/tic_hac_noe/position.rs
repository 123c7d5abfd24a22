//! Cell addressing for the 6x6 board.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells along one side of the board.
pub const BOARD_SIDE: usize = 6;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A validated cell index in `0..36`, laid out row-major (`row * 6 + col`).
///
/// Untrusted input goes through [`TryFrom<usize>`] or [`CellIndex::from_row_col`].
/// Indices produced by the program itself use [`CellIndex::from_raw`], which
/// treats an out-of-range value as a bug and panics.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct CellIndex(u8);

/// Precondition violation: a cell address outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IndexError {
    /// Flat index not in `0..36`.
    #[display("Cell index {} is outside the board (0-35)", _0)]
    OutOfRange(usize),
    /// Row or column not in `0..6`.
    #[display("Cell ({}, {}) is outside the board (rows and columns 0-5)", row, col)]
    RowColOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for IndexError {}

impl CellIndex {
    /// Every cell in index order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT as u8).map(CellIndex)
    }

    /// Builds an index from a row and column known at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..6`.
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIDE && col < BOARD_SIDE, "cell outside the board");
        CellIndex((row * BOARD_SIDE + col) as u8)
    }

    /// Builds an index the caller knows is in range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 36`.
    #[track_caller]
    pub fn from_raw(index: usize) -> Self {
        match Self::try_from(index) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }

    /// Builds an index from a zero-based row and column.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, IndexError> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(IndexError::RowColOutOfRange { row, col });
        }
        Self::try_from(row * BOARD_SIDE + col)
    }

    /// Flat index into the board.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.get() / BOARD_SIDE
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.get() % BOARD_SIDE
    }

    /// Parses a flat index (`"14"`) or a `row,col` pair (`"2,2"`).
    #[instrument]
    pub fn parse(s: &str) -> Option<Result<Self, IndexError>> {
        let s = s.trim();
        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse::<usize>().ok()?;
            let col = col.trim().parse::<usize>().ok()?;
            return Some(Self::from_row_col(row, col));
        }
        s.parse::<usize>().ok().map(Self::try_from)
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = IndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < CELL_COUNT {
            Ok(CellIndex(index as u8))
        } else {
            Err(IndexError::OutOfRange(index))
        }
    }
}

impl From<CellIndex> for usize {
    fn from(cell: CellIndex) -> Self {
        cell.get()
    }
}
