//! Contract-based validation for placements.
//!
//! Preconditions run on every placement and turn into [`MoveError`]s.
//! Postconditions run in debug builds; a failure there is a bug in the
//! engine, not a player mistake.

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, TicHacNoeInvariants};
use super::{CellIndex, Game, TurnState};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the game has ended.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.turn() == TurnState::GameOver {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: no popup is waiting for acknowledgement.
pub struct NoPendingPopup;

impl NoPendingPopup {
    /// Fails with [`MoveError::AwaitingAcknowledgement`] while a popup is open.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.message().is_some() {
            Err(MoveError::AwaitingAcknowledgement)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if the cell holds a token.
    #[instrument(skip(game))]
    pub fn check(cell: CellIndex, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(cell))
        }
    }
}

/// Composite precondition, checked in order: game not over, no popup, cell empty.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game))]
    pub fn check(cell: CellIndex, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        NoPendingPopup::check(game)?;
        CellIsEmpty::check(cell, game)?;
        Ok(())
    }
}

/// Contract for placements.
///
/// Postconditions:
/// - exactly one more token on the board, earlier tokens untouched
/// - all [`TicHacNoeInvariants`] hold
pub struct PlacementContract;

impl Contract<Game, CellIndex> for PlacementContract {
    fn pre(game: &Game, cell: &CellIndex) -> Result<(), MoveError> {
        LegalPlacement::check(*cell, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = TicHacNoeInvariants::check_all(after).err().unwrap_or_default();

        if after.spaces_remaining() + 1 != before.spaces_remaining() {
            warn!(
                before = before.spaces_remaining(),
                after = after.spaces_remaining(),
                "Placement did not consume exactly one space"
            );
            violations.push(InvariantViolation::new("Placement consumes exactly one space"));
        }

        let kept = CellIndex::all()
            .filter(|&i| !before.board().is_empty(i))
            .all(|i| before.board().get(i) == after.board().get(i));
        if !kept {
            violations.push(InvariantViolation::new("Earlier tokens are never overwritten"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tic_hac_noe::Player;

    #[test]
    fn test_precondition_empty_cell() {
        let game = Game::new(Player::PlayerOne);
        assert!(PlacementContract::pre(&game, &CellIndex::from_raw(20)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = Game::new(Player::PlayerOne);
        let cell = CellIndex::from_raw(20);
        game.try_place(cell).unwrap();
        assert_eq!(
            PlacementContract::pre(&game, &cell),
            Err(MoveError::CellOccupied(cell))
        );
    }

    #[test]
    fn test_precondition_order_popup_before_occupied() {
        let mut game = Game::new(Player::PlayerOne);
        let cell = CellIndex::from_raw(20);
        game.try_place(cell).unwrap();
        let _ = game.try_place(cell);
        assert_eq!(
            PlacementContract::pre(&game, &cell),
            Err(MoveError::AwaitingAcknowledgement)
        );
    }

    #[test]
    fn test_postcondition_holds_after_placement() {
        let before = Game::new(Player::PlayerTwo);
        let mut after = before.clone();
        after.try_place(CellIndex::from_raw(0)).unwrap();
        assert!(PlacementContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut before = Game::new(Player::PlayerOne);
        before.try_place(CellIndex::from_raw(0)).unwrap();
        let mut after = before.clone();
        after.try_place(CellIndex::from_raw(1)).unwrap();
        after.board.clear();
        after.board.occupy(CellIndex::from_raw(0), Player::PlayerTwo);
        after.board.occupy(CellIndex::from_raw(1), Player::PlayerOne);

        assert!(PlacementContract::post(&before, &after).is_err());
    }
}
