//! Game rules for Tic-Hac-Noe.
//!
//! Pure functions over a [`Board`]. The session calls [`evaluate`] once
//! after every accepted placement and drives the turn sequencer from the
//! result.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, LineKind, winning_line};

use super::{Board, CellIndex, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of checking the board at the end of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndState {
    /// Board is full.
    Draw,
    /// Player 1 holds a complete line.
    Player1Wins,
    /// Player 2 holds a complete line.
    Player2Wins,
    /// Play goes on.
    Continue,
}

impl EndState {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            EndState::Player1Wins => Some(Player::PlayerOne),
            EndState::Player2Wins => Some(Player::PlayerTwo),
            EndState::Draw | EndState::Continue => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_terminal(self) -> bool {
        self != EndState::Continue
    }

    /// Result message shown to the players, if the game ended.
    pub fn message(self) -> Option<String> {
        match self {
            EndState::Draw => Some("We have a draw...".to_string()),
            EndState::Player1Wins | EndState::Player2Wins => {
                self.winner().map(|player| format!("{player} wins!"))
            }
            EndState::Continue => None,
        }
    }
}

/// An [`EndState`] plus the cells the presentation layer should highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Outcome of the check.
    pub end: EndState,
    /// The winning line, when `end` is a win.
    pub line: Option<Line>,
}

impl Evaluation {
    /// Cells to highlight: the winning line, or the whole board on a draw.
    pub fn highlight(&self) -> Vec<CellIndex> {
        match (self.end, self.line) {
            (EndState::Draw, _) => CellIndex::all().collect(),
            (_, Some(line)) => line.cells.to_vec(),
            (_, None) => Vec::new(),
        }
    }
}

/// Checks the board in fixed priority: full board, Player 1 line, Player 2 line.
#[instrument(skip(board), fields(spaces_remaining = board.spaces_remaining()))]
pub fn evaluate(board: &Board) -> Evaluation {
    let evaluation = if is_full(board) {
        Evaluation {
            end: EndState::Draw,
            line: None,
        }
    } else if let Some(line) = winning_line(board, Player::PlayerOne) {
        Evaluation {
            end: EndState::Player1Wins,
            line: Some(line),
        }
    } else if let Some(line) = winning_line(board, Player::PlayerTwo) {
        Evaluation {
            end: EndState::Player2Wins,
            line: Some(line),
        }
    } else {
        Evaluation {
            end: EndState::Continue,
            line: None,
        }
    };
    debug!(end = ?evaluation.end, line = ?evaluation.line.map(|l| l.kind), "Board evaluated");
    evaluation
}
