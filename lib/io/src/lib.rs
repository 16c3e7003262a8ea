//! # io
//!
//! Text surfaces around the game core: square and move notation, piece
//! symbols, board rendering and position strings.
//!
//! Algebraic notation labels grid row 0 as rank 8 and row 7 as rank 1, so
//! White's pawns start on rank 2 as usual.
//!
//! # Date
//! 18/10/2026

pub mod board_io;
pub mod game_io;
pub mod move_io;
pub mod piece_io;

use thiserror::Error;

pub use board_io::{format_board, format_square, parse_square};
pub use game_io::{format_position, load_position_file, parse_position, START_POSITION};
pub use move_io::{format_commit, parse_move};
pub use piece_io::{format_piece, piece_from_symbol, piece_symbol};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid square {0:?}, expected a file a-h and a rank 1-8")]
    InvalidSquare(String),
    #[error("invalid move {0:?}, expected something like e2e4")]
    InvalidMove(String),
    #[error("invalid position {0:?}")]
    InvalidPosition(String),
    #[error("position has {0} rows, expected 8")]
    RowCount(usize),
    #[error("row {row} covers {width} files, expected 8")]
    RowWidth { row: usize, width: usize },
    #[error("unknown piece symbol {0:?}")]
    UnknownPiece(char),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
