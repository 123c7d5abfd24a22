//! Placement actions and their results.
//!
//! A placement is a domain event: a player putting one token on one cell.

use super::rules::{EndState, Line};
use super::{CellIndex, Player, TurnState};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's token placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player placing the token.
    pub player: Player,
    /// The cell receiving the token.
    pub cell: CellIndex,
}

impl Placement {
    /// Creates a new placement.
    #[instrument]
    pub fn new(player: Player, cell: CellIndex) -> Self {
        Self { player, cell }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.player, self.cell)
    }
}

/// An accepted placement and what it did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    /// The token that went down.
    pub placement: Placement,
    /// End-of-turn evaluation after the token went down.
    pub end: EndState,
    /// The winning line, when `end` is a win.
    pub line: Option<Line>,
    /// Turn state after the sequencer advanced.
    pub state: TurnState,
}

/// Why a placement was rejected.
///
/// Every variant is recoverable: the board is untouched. Only an occupied
/// cell raises a popup; see [`MoveError::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize, Deserialize)]
pub enum MoveError {
    /// The game is over; only a restart accepts tokens again.
    #[display("Game is already over")]
    GameOver,

    /// A popup message is still waiting for acknowledgement.
    #[display("A message is waiting to be acknowledged")]
    AwaitingAcknowledgement,

    /// The cell already holds a token.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(CellIndex),
}

impl MoveError {
    /// Popup text shown for the rejection, if any.
    ///
    /// Clicks while the game is over or a popup is open are ignored silently
    /// so the pending message survives.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::CellOccupied(_) => {
                Some("You can't place the token there. That space is occupied.")
            }
            Self::GameOver | Self::AwaitingAcknowledgement => None,
        }
    }
}

impl std::error::Error for MoveError {}
