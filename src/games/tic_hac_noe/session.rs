//! The live game session: a [`Game`] wired to randomness and a presenter.

use super::action::{Accepted, MoveError};
use super::events::{Presenter, SessionEvent};
use super::game::{Game, Restarted, Score};
use super::random::{RandomSource, RngSource};
use super::rules::{EndState, Line};
use super::{Board, CellIndex, TurnState};
use tracing::{debug, info, instrument};

/// One table of Tic-Hac-Noe.
///
/// Owns the game, the random source that picks who opens, and the
/// presenter notified of every change. Construct one and pass it to the
/// input adapter; there is no global instance.
#[derive(Debug)]
pub struct Session<R, P> {
    game: Game,
    rng: R,
    presenter: P,
}

impl<P: Presenter> Session<RngSource<rand::rngs::ThreadRng>, P> {
    /// Creates a session drawing the opening player from the thread RNG.
    pub fn with_thread_rng(presenter: P) -> Self {
        Self::new(RngSource::thread(), presenter)
    }
}

impl<R: RandomSource, P: Presenter> Session<R, P> {
    /// Creates a session, choosing the opening player at random.
    #[instrument(skip_all)]
    pub fn new(mut rng: R, mut presenter: P) -> Self {
        let first = rng.choose_first_player();
        let game = Game::new(first);
        info!(state = %game.state(), "Session started");
        presenter.present(&SessionEvent::StateChanged {
            state: game.state(),
        });
        Self {
            game,
            rng,
            presenter,
        }
    }

    /// Attempts to place the current player's token on `cell`.
    ///
    /// See [`Game::try_place`]. Every outcome is also reported to the
    /// presenter: the token, the highlight and scores when the game ends,
    /// and the popup text.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, cell: CellIndex) -> Result<Accepted, MoveError> {
        let state_before = self.game.state();
        match self.game.try_place(cell) {
            Ok(accepted) => {
                self.emit(SessionEvent::TokenPlaced {
                    placement: accepted.placement,
                });
                if accepted.end.is_terminal() {
                    self.emit(SessionEvent::Highlight {
                        cells: self.game.highlight(),
                    });
                    if accepted.end.winner().is_some() {
                        self.emit(SessionEvent::ScoreChanged {
                            score: self.game.score(),
                        });
                    }
                }
                self.emit(SessionEvent::StateChanged {
                    state: accepted.state,
                });
                if let Some(text) = self.game.message().map(str::to_string) {
                    self.emit(SessionEvent::Message { text });
                }
                Ok(accepted)
            }
            Err(err) => {
                if let Some(text) = err.message() {
                    self.emit(SessionEvent::Message {
                        text: text.to_string(),
                    });
                }
                let state = self.game.state();
                if state != state_before {
                    self.emit(SessionEvent::StateChanged { state });
                }
                Err(err)
            }
        }
    }

    /// Dismisses the pending popup. See [`Game::acknowledge`].
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) -> TurnState {
        let before = self.game.state();
        let after = self.game.acknowledge();
        if after != before {
            self.emit(SessionEvent::StateChanged { state: after });
        }
        after
    }

    /// Clears the board and opens a new game with a random first player.
    ///
    /// Scores reset only when called from an active-play state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Restarted {
        let first = self.rng.choose_first_player();
        let restarted = self.game.restart(first);
        self.emit(SessionEvent::BoardCleared);
        if restarted.scores_reset {
            self.emit(SessionEvent::ScoreChanged {
                score: self.game.score(),
            });
        }
        self.emit(SessionEvent::StateChanged {
            state: restarted.state,
        });
        restarted
    }

    fn emit(&mut self, event: SessionEvent) {
        debug!(?event, "Presenting event");
        self.presenter.present(&event);
    }
}

impl<R, P> Session<R, P> {
    /// Evaluates the board as it stands. See [`Game::evaluate_end_of_turn`].
    pub fn evaluate_end_of_turn(&self) -> EndState {
        self.game.evaluate_end_of_turn()
    }

    /// Effective turn state.
    pub fn state(&self) -> TurnState {
        self.game.state()
    }

    /// Number of empty cells.
    pub fn spaces_remaining(&self) -> usize {
        self.game.spaces_remaining()
    }

    /// Games won by Player 1.
    pub fn score_player_one(&self) -> u32 {
        self.game.score_player_one()
    }

    /// Games won by Player 2.
    pub fn score_player_two(&self) -> u32 {
        self.game.score_player_two()
    }

    /// Both scores.
    pub fn score(&self) -> Score {
        self.game.score()
    }

    /// The line that won the last game, if it was won.
    pub fn winning_line(&self) -> Option<&Line> {
        self.game.winning_line()
    }

    /// The pending popup text.
    pub fn message(&self) -> Option<&str> {
        self.game.message()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Splits the session into its game, random source and presenter.
    pub fn into_parts(self) -> (Game, R, P) {
        (self.game, self.rng, self.presenter)
    }
}
