//! Line-oriented console front end.
//!
//! Plays the role of the input adapter (turning typed commands into session
//! calls) and of the presentation layer (printing session events).

use crate::config::GameConfig;
use crate::{CellIndex, IndexError, Presenter, RandomSource, Session, SessionEvent, TurnState};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Prints [`SessionEvent`]s to a writer.
#[derive(Debug)]
pub struct ConsolePresenter<W> {
    out: W,
    format: OutputFormat,
    config: GameConfig,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, format: OutputFormat, config: GameConfig) -> Self {
        Self {
            out,
            format,
            config,
        }
    }

    /// Writes one line of free text (ignored in JSON mode).
    pub fn line(&mut self, text: &str) {
        if self.format == OutputFormat::Text {
            self.write(text);
        }
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!(error = %e, "Failed to write console output");
        }
    }

    fn describe(&self, event: &SessionEvent) -> Option<String> {
        match event {
            SessionEvent::TokenPlaced { placement } => Some(format!(
                "{} ({}) placed a token on cell {}",
                self.config.name_of(placement.player),
                placement.player.symbol(),
                placement.cell
            )),
            SessionEvent::StateChanged { state } => match state.player() {
                Some(player) => Some(format!("{} to move: {}", self.config.name_of(player), state)),
                None if *state == TurnState::GameOver => Some("GAME OVER".to_string()),
                None => None,
            },
            SessionEvent::Message { text } => Some(format!("*** {text} (type 'ok' to continue)")),
            SessionEvent::Highlight { cells } => {
                let cells: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
                Some(format!("Highlight: {}", cells.join(" ")))
            }
            SessionEvent::ScoreChanged { score } => Some(format!(
                "Score: {} {}, {} {}",
                self.config.player_one_name(),
                score.player_one_wins(),
                self.config.player_two_name(),
                score.player_two_wins()
            )),
            SessionEvent::BoardCleared => Some("The board is cleared.".to_string()),
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn present(&mut self, event: &SessionEvent) {
        match self.format {
            OutputFormat::Text => {
                if let Some(text) = self.describe(event) {
                    self.write(&text);
                }
            }
            OutputFormat::Json => match serde_json::to_string(event) {
                Ok(json) => self.write(&json),
                Err(e) => warn!(error = %e, "Failed to serialize event"),
            },
        }
    }
}

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a token.
    Place(CellIndex),
    /// Dismiss the popup.
    Acknowledge,
    /// Start a new game.
    Restart,
    /// Print the board.
    Board,
    /// Print the scores.
    Score,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// Why a typed line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// The line named a cell outside the board.
    #[display("{}", _0)]
    OffBoard(IndexError),
    /// The line was not a command at all.
    #[display("Unknown command '{}' (type 'help')", _0)]
    Unknown(String),
}

impl std::error::Error for CommandError {}

impl ConsoleCommand {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let word = line.trim().to_lowercase();
        match word.as_str() {
            "ok" | "o" => return Ok(Self::Acknowledge),
            "restart" | "r" | "play again" => return Ok(Self::Restart),
            "board" | "b" => return Ok(Self::Board),
            "score" | "s" => return Ok(Self::Score),
            "help" | "h" | "?" => return Ok(Self::Help),
            "quit" | "q" | "exit" => return Ok(Self::Quit),
            _ => {}
        }
        match CellIndex::parse(&word) {
            Some(Ok(cell)) => Ok(Self::Place(cell)),
            Some(Err(e)) => Err(CommandError::OffBoard(e)),
            None => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

const HELP: &str = "Commands: <cell 0-35> | <row>,<col> | ok | restart | board | score | help | quit";

/// Runs the read-eval loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R, W, I>(
    session: &mut Session<R, ConsolePresenter<W>>,
    input: I,
    config: &GameConfig,
) -> std::io::Result<()>
where
    R: RandomSource,
    W: Write,
    I: BufRead,
{
    let board = session.board().display();
    session.presenter_mut().line(HELP);
    session.presenter_mut().line(&board);

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match ConsoleCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Unparseable input");
                session.presenter_mut().line(&e.to_string());
                continue;
            }
        };

        match command {
            ConsoleCommand::Place(cell) => {
                if session.try_place(cell).is_ok() && *config.show_board_after_move() {
                    let board = session.board().display();
                    session.presenter_mut().line(&board);
                }
            }
            ConsoleCommand::Acknowledge => {
                session.acknowledge();
            }
            ConsoleCommand::Restart => {
                session.restart();
                let board = session.board().display();
                session.presenter_mut().line(&board);
            }
            ConsoleCommand::Board => {
                let board = session.board().display();
                session.presenter_mut().line(&board);
            }
            ConsoleCommand::Score => {
                let score = session.score();
                session.presenter_mut().present(&SessionEvent::ScoreChanged { score });
            }
            ConsoleCommand::Help => session.presenter_mut().line(HELP),
            ConsoleCommand::Quit => {
                info!("Player quit");
                break;
            }
        }
    }
    Ok(())
}
