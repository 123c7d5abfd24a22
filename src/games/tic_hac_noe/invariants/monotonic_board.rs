//! Monotonic board invariant: cells never change once occupied.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the placement history onto an empty board must hit an empty
/// cell every time and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for placement in game.history() {
            if !reconstructed.occupy(placement.cell, placement.player) {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tic_hac_noe::{Cell, CellIndex, Placement, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&Game::new(Player::PlayerOne)));
    }

    #[test]
    fn test_placements_hold() {
        let mut game = Game::new(Player::PlayerOne);
        for i in [10, 11, 12, 13] {
            game.try_place(CellIndex::from_raw(i)).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut game = Game::new(Player::PlayerOne);
        let cell = CellIndex::from_raw(9);
        game.try_place(cell).unwrap();
        game.history.push(Placement::new(Player::PlayerTwo, cell));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_board_without_history_violates() {
        let mut game = Game::new(Player::PlayerOne);
        game.board.occupy(CellIndex::from_raw(0), Player::PlayerOne);
        assert_eq!(game.board().get(CellIndex::from_raw(0)), Cell::Occupied(Player::PlayerOne));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
