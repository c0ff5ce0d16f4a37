//! Line-based terminal front end.
//!
//! Translates typed commands into session calls and renders what comes
//! back. Every game decision is made by [`GameSession`].

use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_tictactoe::{GameError, GameSession, Mode, Player, Position, Status, TurnOutcome};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  <cell>        play X at a cell (1-9 or a label such as 'center')
  o <cell>      play O (human-vs-human only)
  mode <name>   switch mode and restart
  modes         list modes
  reset         start over
  board         show the board
  help          show this text
  quit          leave";

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Play(Player, Position),
    /// Switch mode.
    Mode(Mode),
    /// List modes.
    Modes,
    /// Start over.
    Reset,
    /// Redraw.
    Board,
    /// Show commands.
    Help,
    /// Exit.
    Quit,
}

/// Parses one line of input.
#[instrument]
pub fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let input = match head.to_ascii_lowercase().as_str() {
        "" | "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        "reset" => Input::Reset,
        "board" => Input::Board,
        "modes" => Input::Modes,
        "mode" => Mode::from_str(rest)
            .map(Input::Mode)
            .map_err(|_| format!("Unknown mode '{}'", rest))?,
        "o" => Input::Play(Player::O, parse_cell(rest)?),
        "x" => Input::Play(Player::X, parse_cell(rest)?),
        _ => Input::Play(Player::X, parse_cell(line)?),
    };
    debug!(?input, "Parsed input");
    Ok(input)
}

fn parse_cell(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s).ok_or_else(|| format!("'{}' is not a cell (use 1-9)", s))
}

/// User-facing text for a finished game.
pub fn outcome_message(outcome: TurnOutcome) -> Option<String> {
    match outcome {
        TurnOutcome::Continued => None,
        TurnOutcome::Won(player) => Some(format!("{} Wins!", player)),
        TurnOutcome::Tied => Some("Tie".to_string()),
    }
}

/// User-facing text for a rejected move.
pub fn error_message(err: &GameError) -> String {
    match err {
        GameError::GameAlreadyOver => "Reset to play again".to_string(),
        GameError::UnsupportedStrategy(_) => format!("Feature not available: {}", err),
        _ => err.to_string(),
    }
}

/// Drives one session from a reader to a writer.
pub struct Console<R, W> {
    session: GameSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console around a session.
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Mode: {}", self.session.mode().name())?;
        self.render_board()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_input(&line) {
                Ok(Input::Quit) => break,
                Ok(input) => self.handle(input)?,
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
        Ok(())
    }

    fn handle(&mut self, input: Input) -> Result<()> {
        match input {
            Input::Play(player, pos) => match self.session.execute_turn(pos.cell_index(), player) {
                Ok(outcome) => {
                    if let Some(reply) = self.session.last_automated_move() {
                        writeln!(self.output, "{} plays {}", reply.player, reply.position)?;
                    }
                    self.render_board()?;
                    if let Some(msg) = outcome_message(outcome) {
                        writeln!(self.output, "{}", msg)?;
                    }
                }
                Err(e) => writeln!(self.output, "{}", error_message(&e))?,
            },
            Input::Mode(mode) => {
                self.session.set_mode(mode);
                writeln!(self.output, "Mode: {}", mode.name())?;
                self.render_board()?;
            }
            Input::Modes => {
                for mode in <Mode as strum::IntoEnumIterator>::iter() {
                    writeln!(self.output, "  {:<20} {}", mode.to_string(), mode.name())?;
                }
            }
            Input::Reset => {
                self.session.reset();
                self.render_board()?;
            }
            Input::Board => {
                self.render_board()?;
                if let Status::Won(_) | Status::Tied = self.session.status() {
                    writeln!(self.output, "Reset to play again")?;
                }
            }
            Input::Help => writeln!(self.output, "{}", HELP)?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn render_board(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.session.board())?;
        Ok(())
    }
}
