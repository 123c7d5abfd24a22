//! Tic-Hac-Noe library - rules engine and turn sequencer
//!
//! Tic-tac-toe on a 6x6 board: each player places two tokens per turn,
//! and a full row, column or long diagonal of six wins.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (line and draw detection)
//! - **Game**: the turn sequencer and scores, as plain data
//! - **Session**: a game wired to a random source and a presenter
//! - **Console**: a text front end driving a session from stdin
//!
//! # Example
//!
//! ```
//! use tic_hac_noe::{CellIndex, Player, ScriptedRandom, Session, SessionEvent, TurnState};
//!
//! let mut session = Session::new(ScriptedRandom::always(Player::PlayerOne), Vec::<SessionEvent>::new());
//! assert_eq!(session.state(), TurnState::P1Move1);
//!
//! session.try_place(CellIndex::from_raw(14)).unwrap();
//! assert_eq!(session.state(), TurnState::P1Move2);
//! assert_eq!(session.spaces_remaining(), 35);
//!
//! // Occupied: rejected, and a popup blocks play until acknowledged.
//! assert!(session.try_place(CellIndex::from_raw(14)).is_err());
//! assert_eq!(session.state(), TurnState::Popup);
//! assert_eq!(session.acknowledge(), TurnState::P1Move2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::{CommandError, ConsoleCommand, ConsolePresenter, OutputFormat, run as run_console};

// Crate-level exports - Game types
pub use games::tic_hac_noe::{
    Accepted, BOARD_SIDE, Board, CELL_COUNT, Cell, CellIndex, EndState, Evaluation, Game,
    IndexError, LINES, Line, LineKind, MoveError, Placement, Presenter, RandomSource, Restarted,
    RngSource, Score, ScriptedRandom, Session, SessionEvent, TurnState, Player,
};

// Crate-level exports - Contracts and invariants
pub use games::tic_hac_noe::invariants::{
    Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    SpacesConservedInvariant, TicHacNoeInvariants, TurnCycleInvariant,
};
pub use games::tic_hac_noe::{
    CellIsEmpty, Contract, GameNotOver, LegalPlacement, NoPendingPopup, PlacementContract,
};

// Crate-level exports - Pure rule functions
pub use games::tic_hac_noe::rules;
