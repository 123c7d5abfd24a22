//! Tic-Hac-Noe: tic-tac-toe on a 6x6 board, two tokens per turn,
//! six in a line to win.

mod action;
mod contracts;
mod events;
mod game;
pub mod invariants;
mod phases;
mod position;
mod random;
pub mod rules;
mod session;
mod types;

pub use action::{Accepted, MoveError, Placement};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalPlacement, NoPendingPopup, PlacementContract};
pub use events::{Presenter, SessionEvent};
pub use game::{Game, Restarted, Score};
pub use phases::TurnState;
pub use position::{BOARD_SIDE, CELL_COUNT, CellIndex, IndexError};
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use rules::{EndState, Evaluation, LINES, Line, LineKind};
pub use session::Session;
pub use types::{Board, Cell, Player};
