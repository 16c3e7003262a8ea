//! # board_io.rs
//!
//! Implements square notation and board visualization functions.
//!
//! This file contains the conversion between grid squares and algebraic
//! names, and renders a board with Unicode box-drawing characters. Rank and
//! file labels are drawn around the grid; highlighted candidates are marked
//! with `*` on empty squares and brackets around occupied ones.
//!
//! # Date
//! 18/10/2026

use lazy_static::lazy_static;
use regex::Regex;

use game::{constants::*, Board, Square};

use crate::{piece_io::piece_symbol, ParseError};

lazy_static! {
    static ref SQUARE_PATTERN: Regex = Regex::new(
        r"^\s*([a-hA-H])([1-8])\s*$"
    ).unwrap();
}

/// Algebraic name of a square, e.g. `e2` for `(4, 6)`.
pub fn format_square(square: Square) -> String {
    let file_char = (b'a' + square.file) as char;
    let rank_char = (b'0' + BOARD_SIZE - square.rank) as char;

    format!("{}{}", file_char, rank_char)
}

pub fn parse_square(text: &str) -> Result<Square, ParseError> {
    let captures = SQUARE_PATTERN
        .captures(text)
        .ok_or_else(|| ParseError::InvalidSquare(text.to_string()))?;

    let file = captures[1].to_ascii_lowercase().as_bytes()[0] - b'a';
    let rank = captures[2].as_bytes()[0] - b'0';

    Square::new(file as i8, (BOARD_SIZE - rank) as i8)
        .ok_or_else(|| ParseError::InvalidSquare(text.to_string()))
}

fn format_cell(board: &Board, square: Square) -> String {
    let highlighted = board.is_highlighted(square);

    match board.occupant(square) {
        Some(piece) if highlighted => format!("[{}]", piece_symbol(piece)),
        Some(piece) => format!(" {} ", piece_symbol(piece)),
        None if highlighted => " * ".to_string(),
        None => "   ".to_string(),
    }
}

pub fn format_board(board: &Board) -> String {
    let files = BOARD_SIZE as usize;
    let mut result = String::new();

    result.push_str(
        &format!("  ╔{}╗\n", "═══╤".repeat(files - 1) + "═══")
    );

    for rank in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .filter_map(|file| Square::new(file as i8, rank as i8))
            .map(|square| format_cell(board, square))
            .collect();

        result.push_str(
            &format!("{} ║{}║\n", BOARD_SIZE - rank, cells.join("│"))
        );

        if rank + 1 < BOARD_SIZE {
            result.push_str(
                &format!("  ╟{}╢\n", "───┼".repeat(files - 1) + "───")
            );
        }
    }

    result.push_str(
        &format!("  ╚{}╝\n   ", "═══╧".repeat(files - 1) + "═══")
    );

    for file in 0..BOARD_SIZE {
        result.push_str(&format!(" {}  ", (b'A' + file) as char));
    }

    result.truncate(result.trim_end().len());
    result.push('\n');

    result
}
