//! Core domain types for Tic-Hac-Noe.

use super::position::{BOARD_SIDE, CELL_COUNT, CellIndex};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player 1, placing cubes.
    #[strum(to_string = "Player 1")]
    PlayerOne,
    /// Player 2, placing cylinders.
    #[strum(to_string = "Player 2")]
    PlayerTwo,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::PlayerOne => 'X',
            Player::PlayerTwo => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's token.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 6x6 board with a running count of empty cells.
///
/// `spaces_remaining` always equals the number of [`Cell::Empty`] entries.
/// Cells only move from empty to occupied; [`Board::clear`] is the one way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order (0-35).
    cells: [Cell; CELL_COUNT],
    spaces_remaining: usize,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            spaces_remaining: CELL_COUNT,
        }
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.get()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, index: CellIndex) -> bool {
        self.get(index) == Cell::Empty
    }

    /// Writes `player`'s token into an empty cell.
    ///
    /// Returns `false` and leaves the board untouched if the cell is occupied.
    #[instrument(skip(self), fields(spaces_remaining = self.spaces_remaining))]
    pub fn occupy(&mut self, index: CellIndex, player: Player) -> bool {
        if !self.is_empty(index) {
            return false;
        }
        self.cells[index.get()] = Cell::Occupied(player);
        self.spaces_remaining -= 1;
        true
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Number of empty cells.
    pub fn spaces_remaining(&self) -> usize {
        self.spaces_remaining
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the empty cells, in index order.
    pub fn empty_cells(&self) -> Vec<CellIndex> {
        CellIndex::all().filter(|&i| self.is_empty(i)).collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their index so a player can type it back.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let index = CellIndex::from_raw(row * BOARD_SIDE + col);
                match self.get(index) {
                    Cell::Empty => result.push_str(&format!("{:>2}", index.get())),
                    Cell::Occupied(player) => result.push_str(&format!("{:>2}", player.symbol())),
                }
                if col < BOARD_SIDE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIDE - 1 {
                result.push_str("\n--+--+--+--+--+--\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.spaces_remaining(), 36);
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_occupy_decrements_once() {
        let mut board = Board::new();
        let cell = CellIndex::from_raw(5);
        assert!(board.occupy(cell, Player::PlayerOne));
        assert!(!board.occupy(cell, Player::PlayerTwo));
        assert_eq!(board.get(cell), Cell::Occupied(Player::PlayerOne));
        assert_eq!(board.spaces_remaining(), 35);
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut board = Board::new();
        board.occupy(CellIndex::from_raw(0), Player::PlayerOne);
        board.occupy(CellIndex::from_raw(35), Player::PlayerTwo);
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_marks_tokens() {
        let mut board = Board::new();
        board.occupy(CellIndex::from_raw(0), Player::PlayerOne);
        board.occupy(CellIndex::from_raw(1), Player::PlayerTwo);
        let text = board.display();
        assert!(text.starts_with(" X| O| 2"));
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn test_player_labels() {
        assert_eq!(Player::PlayerOne.to_string(), "Player 1");
        assert_eq!(Player::PlayerTwo.opponent(), Player::PlayerOne);
    }
}
