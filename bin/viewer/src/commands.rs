//! # commands.rs
//!
//! Parses and executes the viewer's text commands.
//!
//! Each input line maps to one `Command`. Commands mirror what a board view
//! does with the mouse: pick a piece up, put it down on a highlighted square,
//! or click a square and let the game decide.
//!
//! # Date
//! 18/10/2026

use log::{debug, info, warn};
use thiserror::Error;
use timed::timed;

use game::{ClickOutcome, GameState, MoveError, Square};
use io::{
    format_board, format_commit, format_piece, format_position,
    format_square, parse_move, parse_square, ParseError,
};

pub const HELP: &str = "\
commands:
  show              draw the board
  select <square>   pick up a piece and highlight its moves
  to <square>       move the selected piece to a highlighted square
  move <from><to>   select and move in one go, e.g. move e2e4
  click <square>    behave like a mouse click on the square
  deselect          put the selected piece back
  piece <square>    describe the piece on a square
  position          print the position string
  reset             start over from the initial position
  help              print this text
  quit              leave";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Select(Square),
    To(Square),
    Move(Square, Square),
    Click(Square),
    Deselect,
    Piece(Square),
    Position,
    Reset,
    Help,
    Quit,
}

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

fn argument<'a>(
    name: &'static str,
    argument: Option<&'a str>
) -> Result<&'a str, CommandError> {
    argument.ok_or(CommandError::MissingArgument(name))
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim())),
        None => (line, None),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "show" | "board" => Command::Show,
        "select" => Command::Select(parse_square(argument("select", rest)?)?),
        "to" => Command::To(parse_square(argument("to", rest)?)?),
        "move" => {
            let (from, to) = parse_move(argument("move", rest)?)?;
            Command::Move(from, to)
        }
        "click" => Command::Click(parse_square(argument("click", rest)?)?),
        "deselect" => Command::Deselect,
        "piece" => Command::Piece(parse_square(argument("piece", rest)?)?),
        "position" => Command::Position,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(name.to_string())),
    };

    Ok(Some(command))
}

fn describe_candidates(state: &GameState) -> String {
    let names: Vec<String> = state
        .candidates()
        .map(|moves| moves.iter().map(|sq| format_square(*sq)).collect())
        .unwrap_or_default();

    if names.is_empty() {
        "no moves".to_string()
    } else {
        names.join(" ")
    }
}

/// Runs one command against the game and returns the text to print.
#[timed(duration(printer = "debug!"))]
pub fn execute(
    state: &mut GameState,
    command: Command
) -> Result<(Flow, String), CommandError> {
    let output = match command {
        Command::Show => format_board(&state.board),
        Command::Select(square) => {
            state.select_at(square)?;
            describe_candidates(state)
        }
        Command::To(square) => {
            let commit = state.commit_move(square)?;
            info!("{:?} played {}", state.playing.opposite(), format_commit(&commit));
            format_board(&state.board)
        }
        Command::Move(from, to) => {
            state.select_at(from)?;
            if let Err(error) = state.commit_move(to) {
                state.deselect();
                return Err(error.into());
            }
            format_board(&state.board)
        }
        Command::Click(square) => match state.click(square)? {
            ClickOutcome::Selected(_) => describe_candidates(state),
            ClickOutcome::Deselected => "deselected".to_string(),
            ClickOutcome::Moved(commit) => {
                info!("{:?} played {}", state.playing.opposite(), format_commit(&commit));
                format_board(&state.board)
            }
            ClickOutcome::Ignored => {
                warn!("Nothing to do on {}", format_square(square));
                String::new()
            }
        },
        Command::Deselect => {
            state.deselect();
            String::new()
        }
        Command::Piece(square) => match state.board.occupant(square) {
            Some(piece) => format_piece(piece),
            None => format!("{} is empty", format_square(square)),
        },
        Command::Position => format_position(state),
        Command::Reset => {
            state.reset();
            format_board(&state.board)
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok((Flow::Stop, String::new())),
    };

    Ok((Flow::Continue, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{square, Color};

    fn run(state: &mut GameState, line: &str) -> Result<(Flow, String), CommandError> {
        let command = parse_command(line)?.expect("blank line");
        execute(state, command)
    }

    #[test]
    fn parses_commands_and_arguments() {
        assert_eq!(parse_command("  ").unwrap(), None);
        assert_eq!(parse_command("SHOW").unwrap(), Some(Command::Show));
        assert_eq!(
            parse_command("select e2").unwrap(),
            Some(Command::Select(square!(4, 6)))
        );
        assert_eq!(
            parse_command("move e2-e4").unwrap(),
            Some(Command::Move(square!(4, 6), square!(4, 4)))
        );
        assert!(matches!(
            parse_command("select"),
            Err(CommandError::MissingArgument("select"))
        ));
        assert!(matches!(
            parse_command("castle"),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(
            parse_command("click z9"),
            Err(CommandError::Parse(ParseError::InvalidSquare(_)))
        ));
    }

    #[test]
    fn select_lists_candidates_in_order() {
        let mut state = GameState::new();

        let (flow, output) = run(&mut state, "select g1").unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(output, "h3 f3");
    }

    #[test]
    fn failed_move_keeps_the_turn() {
        let mut state = GameState::new();

        assert!(matches!(
            run(&mut state, "move e2e5"),
            Err(CommandError::Move(MoveError::NotACandidate(_)))
        ));
        assert!(state.selected.is_none());
        assert_eq!(state.playing, Color::White);

        run(&mut state, "move e2e4").unwrap();
        assert_eq!(state.playing, Color::Black);
    }

    #[test]
    fn timings_are_logged_instead_of_printed() {
        let (sender, receiver) = std::sync::mpsc::channel::<String>();
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("({}) {}", record.target(), message))
            })
            .level(log::LevelFilter::Debug)
            .chain(sender)
            .apply()
            .unwrap();

        let mut state = GameState::new();
        run(&mut state, "position").unwrap();

        let records: Vec<String> = receiver.try_iter().collect();
        assert!(
            records.iter().any(|line| line.contains("function=execute")),
            "no timing record in {records:?}"
        );
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = GameState::new();
        assert_eq!(run(&mut state, "quit").unwrap().0, Flow::Stop);
    }
}
