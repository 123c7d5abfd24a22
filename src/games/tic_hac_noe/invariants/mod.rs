//! First-class invariants for Tic-Hac-Noe.
//!
//! Invariants are logical properties of a [`Game`](super::Game) that hold
//! between any two operations. Placement postconditions check them in debug
//! builds, and they are testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod monotonic_board;
pub mod spaces_conserved;
pub mod turn_cycle;

pub use monotonic_board::MonotonicBoardInvariant;
pub use spaces_conserved::SpacesConservedInvariant;
pub use turn_cycle::TurnCycleInvariant;

/// All Tic-Hac-Noe invariants as a composable set.
pub type TicHacNoeInvariants = (
    MonotonicBoardInvariant,
    SpacesConservedInvariant,
    TurnCycleInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tic_hac_noe::{CellIndex, Game, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new(Player::PlayerOne);
        assert!(TicHacNoeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_placements() {
        let mut game = Game::new(Player::PlayerTwo);
        for i in [0, 7, 14, 21, 28] {
            game.try_place(CellIndex::from_raw(i)).unwrap();
        }
        assert!(TicHacNoeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut game = Game::new(Player::PlayerOne);
        game.try_place(CellIndex::from_raw(3)).unwrap();
        game.board.occupy(CellIndex::from_raw(4), Player::PlayerTwo);

        let violations = TicHacNoeInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
