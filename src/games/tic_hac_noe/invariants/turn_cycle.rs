//! Turn cycle invariant: tokens go down two per player, in order.

use super::super::{Game, TurnState};
use super::Invariant;

/// Invariant: the k-th placement since restart belongs to the player of
/// `opening.advance(k)`, and an active turn state equals
/// `opening.advance(placements)`.
///
/// A finished game must have at least one placement and a recorded result.
pub struct TurnCycleInvariant;

impl Invariant<Game> for TurnCycleInvariant {
    fn holds(game: &Game) -> bool {
        let opening = game.opening();
        let players_match = game
            .history()
            .iter()
            .enumerate()
            .all(|(k, p)| opening.advance(k).player() == Some(p.player));
        if !players_match {
            return false;
        }

        match game.turn() {
            TurnState::GameOver => !game.history().is_empty() && game.outcome().is_some(),
            TurnState::Popup => false,
            active => active == opening.advance(game.history().len()) && game.outcome().is_none(),
        }
    }

    fn description() -> &'static str {
        "Placements follow the two-tokens-per-turn cycle"
    }
}
