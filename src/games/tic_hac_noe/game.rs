//! The rules engine and turn sequencer for one Tic-Hac-Noe table.
//!
//! [`Game`] is plain data: no randomness and no presentation. The
//! [`Session`](super::Session) wraps it with both.

use super::action::{Accepted, MoveError, Placement};
use super::contracts::{Contract, PlacementContract};
use super::rules::{self, EndState, Evaluation, Line};
use super::{Board, CellIndex, Player, TurnState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Win counters for the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    player_one_wins: u32,
    player_two_wins: u32,
}

impl Score {
    /// Games won by Player 1.
    pub fn player_one_wins(&self) -> u32 {
        self.player_one_wins
    }

    /// Games won by Player 2.
    pub fn player_two_wins(&self) -> u32 {
        self.player_two_wins
    }

    /// Wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::PlayerOne => self.player_one_wins,
            Player::PlayerTwo => self.player_two_wins,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::PlayerOne => self.player_one_wins += 1,
            Player::PlayerTwo => self.player_two_wins += 1,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player 1: {}  Player 2: {}",
            self.player_one_wins, self.player_two_wins
        )
    }
}

/// What a restart did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restarted {
    /// Opening state of the new game.
    pub state: TurnState,
    /// True if the scores went back to zero.
    pub scores_reset: bool,
}

/// Board, turn state and scores of the single live game.
///
/// `turn` is always an active-play state or [`TurnState::GameOver`]. A
/// pending `message` masks it as [`TurnState::Popup`] without moving the
/// sequencer, so acknowledging returns to the same active state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: TurnState,
    pub(crate) opening: TurnState,
    pub(crate) history: Vec<Placement>,
    pub(crate) score: Score,
    pub(crate) outcome: Option<Evaluation>,
    pub(crate) message: Option<String>,
}

impl Game {
    /// Creates a game with `first` to move and zeroed scores.
    #[instrument]
    pub fn new(first: Player) -> Self {
        let opening = TurnState::opening(first);
        Self {
            board: Board::new(),
            turn: opening,
            opening,
            history: Vec::new(),
            score: Score::default(),
            outcome: None,
            message: None,
        }
    }

    /// Attempts to place the current player's token on `cell`.
    ///
    /// On success the board is evaluated and the sequencer advances: to the
    /// next state in the cycle, or to [`TurnState::GameOver`] with the score
    /// updated and the result message pending.
    ///
    /// # Errors
    ///
    /// Rejects with a [`MoveError`] if the game is over, a popup is pending,
    /// or the cell is occupied. The board and turn are left untouched; an
    /// occupied cell also raises a popup.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_place(&mut self, cell: CellIndex) -> Result<Accepted, MoveError> {
        if let Err(err) = PlacementContract::pre(self, &cell) {
            warn!(%cell, error = %err, "Placement rejected");
            if let Some(text) = err.message() {
                self.message = Some(text.to_string());
            }
            return Err(err);
        }

        let before = cfg!(debug_assertions).then(|| self.clone());

        let Some(player) = self.turn.player() else {
            unreachable!("preconditions admit only active turn states");
        };
        self.board.occupy(cell, player);
        let placement = Placement::new(player, cell);
        self.history.push(placement);
        debug!(%placement, spaces_remaining = self.board.spaces_remaining(), "Token placed");

        let evaluation = rules::evaluate(&self.board);
        let end = evaluation.end;
        let line = evaluation.line;
        if end.is_terminal() {
            if let Some(winner) = end.winner() {
                self.score.record_win(winner);
            }
            self.message = end.message();
            self.outcome = Some(evaluation);
            self.turn = TurnState::GameOver;
            info!(?end, score = %self.score, "Game over");
        } else {
            self.turn = self.turn.next();
        }

        if let Some(before) = before
            && let Err(violations) = PlacementContract::post(&before, self)
        {
            panic!("placement broke game invariants: {violations:?}");
        }

        Ok(Accepted {
            placement,
            end,
            line,
            state: self.state(),
        })
    }

    /// Evaluates the board as it stands: draw, a win, or continue.
    ///
    /// Pure; the sequencer already applied this after the last placement.
    pub fn evaluate_end_of_turn(&self) -> EndState {
        rules::evaluate(&self.board).end
    }

    /// Dismisses the pending popup, if any, and returns the resulting state.
    ///
    /// After a rejection this is the unchanged active state. After a result
    /// popup the game stays in [`TurnState::GameOver`].
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) -> TurnState {
        if let Some(message) = self.message.take() {
            debug!(%message, "Popup acknowledged");
        }
        self.state()
    }

    /// Clears the board and opens a new game with `first` to move.
    ///
    /// Scores reset only when restarting from an active-play state, i.e. an
    /// abandoned game rather than "play again" after a result.
    #[instrument(skip(self), fields(state = %self.state()))]
    pub fn restart(&mut self, first: Player) -> Restarted {
        let scores_reset = self.state().is_active();
        if scores_reset {
            self.score = Score::default();
        }

        self.board.clear();
        self.history.clear();
        self.outcome = None;
        self.message = None;
        self.opening = TurnState::opening(first);
        self.turn = self.opening;
        info!(state = %self.turn, scores_reset, "Game restarted");

        Restarted {
            state: self.turn,
            scores_reset,
        }
    }

    /// Effective state: `GameOver`, `Popup` while a message is pending, or
    /// the active turn.
    pub fn state(&self) -> TurnState {
        match (self.turn, &self.message) {
            (TurnState::GameOver, _) => TurnState::GameOver,
            (_, Some(_)) => TurnState::Popup,
            (turn, None) => turn,
        }
    }

    /// Sequencer position, ignoring any pending popup.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// State the current game opened with.
    pub fn opening(&self) -> TurnState {
        self.opening
    }

    /// The player to move, if placements are accepted right now.
    pub fn current_player(&self) -> Option<Player> {
        self.state().player()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of empty cells.
    pub fn spaces_remaining(&self) -> usize {
        self.board.spaces_remaining()
    }

    /// Returns the scores.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Games won by Player 1 since the last score reset.
    pub fn score_player_one(&self) -> u32 {
        self.score.player_one_wins()
    }

    /// Games won by Player 2 since the last score reset.
    pub fn score_player_two(&self) -> u32 {
        self.score.player_two_wins()
    }

    /// Placements since the last restart, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Result of the finished game, if it has finished.
    pub fn outcome(&self) -> Option<&Evaluation> {
        self.outcome.as_ref()
    }

    /// The line that won the game, if it was won.
    pub fn winning_line(&self) -> Option<&Line> {
        self.outcome.as_ref().and_then(|o| o.line.as_ref())
    }

    /// Cells to highlight for the finished game; empty while in play.
    pub fn highlight(&self) -> Vec<CellIndex> {
        self.outcome
            .as_ref()
            .map(Evaluation::highlight)
            .unwrap_or_default()
    }

    /// The popup message waiting for acknowledgement.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
