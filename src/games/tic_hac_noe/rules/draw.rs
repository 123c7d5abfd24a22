//! Draw detection for Tic-Hac-Noe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cells remain).
///
/// A full board ends the game as a draw, even when the final token also
/// completed a line.
#[instrument(skip(board), fields(spaces_remaining = board.spaces_remaining()))]
pub fn is_full(board: &Board) -> bool {
    board.spaces_remaining() == 0
}
