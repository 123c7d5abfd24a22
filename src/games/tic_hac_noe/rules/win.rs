//! Line detection for Tic-Hac-Noe.

use super::super::position::{BOARD_SIDE, CellIndex};
use super::super::{Board, Cell, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which row, column or diagonal a [`Line`] runs along.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `0..6`, top to bottom.
    #[display("row {}", _0)]
    Row(u8),
    /// Column `0..6`, left to right.
    #[display("column {}", _0)]
    Column(u8),
    /// Top-left to bottom-right: 0, 7, 14, 21, 28, 35.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left: 5, 10, 15, 20, 25, 30.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Six cells that win the game when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Where the line runs.
    pub kind: LineKind,
    /// The cells, in increasing index order.
    pub cells: [CellIndex; BOARD_SIDE],
}

impl Line {
    /// Returns true if `player` holds every cell of the line.
    pub fn is_held_by(&self, board: &Board, player: Player) -> bool {
        self.cells
            .iter()
            .all(|&cell| board.get(cell) == Cell::Occupied(player))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<String> = self.cells.iter().map(|c| c.to_string()).collect();
        write!(f, "{} [{}]", self.kind, cells.join(", "))
    }
}

/// Every winning line in scan order: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [Line; 14] = build_lines();

const fn build_lines() -> [Line; 14] {
    let blank = Line {
        kind: LineKind::MainDiagonal,
        cells: [CellIndex::at(0, 0); BOARD_SIDE],
    };
    let mut lines = [blank; 14];

    let mut i = 0;
    while i < BOARD_SIDE {
        let mut j = 0;
        while j < BOARD_SIDE {
            lines[i].cells[j] = CellIndex::at(i, j);
            lines[BOARD_SIDE + i].cells[j] = CellIndex::at(j, i);
            lines[2 * BOARD_SIDE].cells[j] = CellIndex::at(j, j);
            lines[2 * BOARD_SIDE + 1].cells[j] = CellIndex::at(j, BOARD_SIDE - 1 - j);
            j += 1;
        }
        lines[i].kind = LineKind::Row(i as u8);
        lines[BOARD_SIDE + i].kind = LineKind::Column(i as u8);
        i += 1;
    }
    lines[2 * BOARD_SIDE + 1].kind = LineKind::AntiDiagonal;
    lines
}

/// Returns the first line in scan order that `player` holds completely.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    LINES.iter().copied().find(|line| line.is_held_by(board, player))
}
