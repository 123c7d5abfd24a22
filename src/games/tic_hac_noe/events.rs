//! Notifications from the session to the presentation layer.

use super::game::Score;
use super::{CellIndex, Placement, TurnState};
use serde::{Deserialize, Serialize};

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A token went down.
    TokenPlaced {
        /// The placement.
        placement: Placement,
    },
    /// The effective turn state changed.
    StateChanged {
        /// The new state.
        state: TurnState,
    },
    /// A blocking popup opened with this text.
    Message {
        /// Popup text.
        text: String,
    },
    /// These cells formed the result: a winning line, or the whole board on a draw.
    Highlight {
        /// Cells to highlight.
        cells: Vec<CellIndex>,
    },
    /// The scores changed.
    ScoreChanged {
        /// The new scores.
        score: Score,
    },
    /// Every token was removed from the board.
    BoardCleared,
}

/// Receives [`SessionEvent`]s. Fire-and-forget: nothing flows back.
pub trait Presenter {
    /// Handles one event.
    fn present(&mut self, event: &SessionEvent);
}

/// Records events, mostly for tests.
impl Presenter for Vec<SessionEvent> {
    fn present(&mut self, event: &SessionEvent) {
        self.push(event.clone());
    }
}

/// Discards every event.
impl Presenter for () {
    fn present(&mut self, _event: &SessionEvent) {}
}
