//! Conservation of empty cells.

use super::super::position::CELL_COUNT;
use super::super::{Cell, Game};
use super::Invariant;

/// Invariant: `spaces_remaining` counts the empty cells, and equals
/// 36 minus the placements made since the last restart.
pub struct SpacesConservedInvariant;

impl Invariant<Game> for SpacesConservedInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let empty = board.cells().iter().filter(|c| **c == Cell::Empty).count();
        empty == board.spaces_remaining() && empty + game.history().len() == CELL_COUNT
    }

    fn description() -> &'static str {
        "Spaces remaining equals empty cells and 36 minus placements"
    }
}
