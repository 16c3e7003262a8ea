mod commands;
mod logger;

use std::{
    env,
    io::{BufRead, Write},
    process::ExitCode,
};

use log::{error, info, warn};

use commands::{execute, parse_command, Flow, HELP};
use game::GameState;

fn load_state() -> Result<GameState, io::ParseError> {
    match env::args().nth(1) {
        Some(path) => {
            info!("Loading position from {path}");
            io::load_position_file(&path)
        }
        None => Ok(GameState::new()),
    }
}

fn main() -> ExitCode {
    if let Err(err) = logger::setup(logger::level_from_env()) {
        eprintln!("Failed to set up logging: {err}");
    }

    let mut state = match load_state() {
        Ok(state) => state,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", io::format_board(&state.board));
    println!("{HELP}");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("Failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                error!("{err}");
                continue;
            }
        };

        match execute(&mut state, command) {
            Ok((Flow::Stop, _)) => break,
            Ok((Flow::Continue, output)) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(err) => error!("{err}"),
        }

        #[cfg(debug_assertions)]
        game::util::verify_game_state(&state);

        if let Err(err) = stdout.flush() {
            warn!("Failed to flush output: {err}");
        }
    }

    ExitCode::SUCCESS
}
