//! # game_io.rs
//!
//! Implements position parsing and serialisation.
//!
//! A position string is the placement field of a FEN record followed by an
//! optional side to move, e.g. `rbnqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`.
//! Rows are listed from grid row 0 (Black's back rank) down to row 7. The
//! format carries no move history, so a pawn's has-moved flag is inferred
//! from whether it still stands on its home row.
//!
//! Position files hold one position string; blank lines and lines starting
//! with `#` are skipped.
//!
//! # Date
//! 18/10/2026

use std::{fs, path::Path};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use game::{constants::*, Color, GameState, PieceKind, Square};

use crate::{
    piece_io::{piece_from_symbol, piece_symbol},
    ParseError,
};

pub const START_POSITION: &str = "rbnqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

lazy_static! {
    static ref POSITION_PATTERN: Regex = Regex::new(
        r"^\s*([KQRBNPkqrbnp1-8/]+)(?:\s+([wbWB]))?\s*$"
    ).unwrap();
}

fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => WHITE_PAWN_ROW,
        Color::Black => BLACK_PAWN_ROW,
    }
}

pub fn parse_position(text: &str) -> Result<GameState, ParseError> {
    let captures = POSITION_PATTERN
        .captures(text)
        .ok_or_else(|| ParseError::InvalidPosition(text.trim().to_string()))?;

    let rows: Vec<&str> = captures[1].split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(ParseError::RowCount(rows.len()));
    }

    let mut state = GameState::empty();

    for (rank, row) in rows.iter().enumerate() {
        let mut file = 0usize;

        for symbol in row.chars() {
            if let Some(skip) = symbol.to_digit(10) {
                file += skip as usize;
                if file > BOARD_SIZE as usize {
                    return Err(ParseError::RowWidth { row: rank, width: file });
                }
                continue;
            }

            let (kind, color) = piece_from_symbol(symbol)
                .ok_or(ParseError::UnknownPiece(symbol))?;
            let too_wide = ParseError::RowWidth { row: rank, width: file + 1 };
            if file >= BOARD_SIZE as usize {
                return Err(too_wide);
            }

            let square = i8::try_from(file)
                .ok()
                .zip(i8::try_from(rank).ok())
                .and_then(|(f, r)| Square::new(f, r))
                .ok_or(too_wide)?;

            let id = state.add_piece(kind, color, square);
            if kind == PieceKind::Pawn && square.rank != pawn_home_row(color) {
                state.board.piece_mut(id).has_moved = true;
            }

            file += 1;
        }

        if file != BOARD_SIZE as usize {
            return Err(ParseError::RowWidth { row: rank, width: file });
        }
    }

    state.playing = match captures.get(2).map(|side| side.as_str()) {
        Some("b") | Some("B") => Color::Black,
        _ => Color::White,
    };

    debug!(
        "Loaded position with {} white and {} black pieces, {:?} to play",
        state.roster(Color::White).len(),
        state.roster(Color::Black).len(),
        state.playing
    );

    Ok(state)
}

/// Inverse of `parse_position` for the pieces still on the grid.
pub fn format_position(state: &GameState) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE as usize);

    for rank in 0..BOARD_SIZE {
        let mut row = String::new();
        let mut empty = 0;

        for file in 0..BOARD_SIZE {
            let occupant = Square::new(file as i8, rank as i8)
                .and_then(|square| state.board.occupant(square));

            match occupant {
                Some(piece) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece_symbol(piece));
                }
                None => empty += 1,
            }
        }

        if empty > 0 {
            row.push_str(&empty.to_string());
        }

        rows.push(row);
    }

    let side = match state.playing {
        Color::White => 'w',
        Color::Black => 'b',
    };

    format!("{} {}", rows.join("/"), side)
}

pub fn load_position_file(path: impl AsRef<Path>) -> Result<GameState, ParseError> {
    let contents = fs::read_to_string(path.as_ref())?;

    let position = contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .ok_or_else(|| ParseError::InvalidPosition(contents.trim().to_string()))?;

    debug!("Reading position from {}", path.as_ref().display());

    parse_position(position)
}
