//! # constants.rs
//!
//! Defines board-wide constants and movement tables.
//!
//! This file contains the board dimensions, file labels, home rows of both
//! colors, the initial back rank layouts, and the direction and offset
//! tables used by move generation. The order of every table is significant:
//! candidate moves are emitted in table order.
//!
//! # Date
//! 18/10/2026

use crate::representations::piece::PieceKind::{self, *};

pub const BOARD_SIZE: u8 = 8;
pub const SQUARE_COUNT: usize = 64;

pub const A: u8 = 0;
pub const B: u8 = 1;
pub const C: u8 = 2;
pub const D: u8 = 3;
pub const E: u8 = 4;
pub const F: u8 = 5;
pub const G: u8 = 6;
pub const H: u8 = 7;

pub const BLACK_BACK_ROW: u8 = 0;
pub const BLACK_PAWN_ROW: u8 = 1;
pub const WHITE_PAWN_ROW: u8 = 6;
pub const WHITE_BACK_ROW: u8 = 7;

pub const WHITE_BACK_RANK: [PieceKind; 8] = [
    Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook
];

pub const BLACK_BACK_RANK: [PieceKind; 8] = [
    Rook, Bishop, Knight, Queen, King, Bishop, Knight, Rook                     /* Bishop before Knight on b/c files  */
];

/// Unit vectors as `(file, rank)` deltas, in emission order.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [
    (1, 1), (1, -1), (-1, 1), (-1, -1)
];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [
    (1, 0), (-1, 0), (0, 1), (0, -1)
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)
];
