//! Turn states for the two-tokens-per-turn sequencer.

use super::Player;
use serde::{Deserialize, Serialize};

/// Where the session is in the turn cycle.
///
/// The four active-play states cycle
/// `P1Move1 -> P1Move2 -> P2Move1 -> P2Move2 -> P1Move1`.
/// `Popup` and `GameOver` mask placement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum TurnState {
    /// Player 1 places their first token.
    #[strum(to_string = "Player 1 Token 1")]
    P1Move1,
    /// Player 1 places their second token.
    #[strum(to_string = "Player 1 Token 2")]
    P1Move2,
    /// Player 2 places their first token.
    #[strum(to_string = "Player 2 Token 1")]
    P2Move1,
    /// Player 2 places their second token.
    #[strum(to_string = "Player 2 Token 2")]
    P2Move2,
    /// A message is waiting to be acknowledged.
    #[strum(to_string = "Popup")]
    Popup,
    /// The game has ended; only restart leaves this state.
    #[strum(to_string = "GAME OVER")]
    GameOver,
}

impl TurnState {
    /// First state of a player's turn.
    pub fn opening(player: Player) -> Self {
        match player {
            Player::PlayerOne => TurnState::P1Move1,
            Player::PlayerTwo => TurnState::P2Move1,
        }
    }

    /// The player whose token goes down next, for active-play states.
    pub fn player(self) -> Option<Player> {
        match self {
            TurnState::P1Move1 | TurnState::P1Move2 => Some(Player::PlayerOne),
            TurnState::P2Move1 | TurnState::P2Move2 => Some(Player::PlayerTwo),
            TurnState::Popup | TurnState::GameOver => None,
        }
    }

    /// Returns true for the four states that accept placements.
    pub fn is_active(self) -> bool {
        self.player().is_some()
    }

    /// Next state in the cycle. Masking states map to themselves.
    pub fn next(self) -> Self {
        match self {
            TurnState::P1Move1 => TurnState::P1Move2,
            TurnState::P1Move2 => TurnState::P2Move1,
            TurnState::P2Move1 => TurnState::P2Move2,
            TurnState::P2Move2 => TurnState::P1Move1,
            masked @ (TurnState::Popup | TurnState::GameOver) => masked,
        }
    }

    /// State reached after `steps` uninterrupted placements.
    pub fn advance(self, steps: usize) -> Self {
        (0..steps % 4).fold(self, |state, _| state.next())
    }
}
