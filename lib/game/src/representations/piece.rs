//! # piece.rs
//!
//! Defines piece representation and properties.
//!
//! This file contains the `Piece` record stored in the board arena along with
//! its color and kind tags. A piece refers to the grid only through its
//! coordinates; the grid refers back to it through a `PieceId`.
//!
//! # Date
//! 18/10/2026

use crate::representations::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline(always)]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of one pawn step. White walks towards row 0.
    #[inline(always)]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }
}

/// Index of a piece in the board arena. Ids are never reused within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,

    pub has_moved: bool,                                                        /* Only consulted for pawns           */
    pub captured: bool,                                                         /* Off the grid, still on its roster  */
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved: false,
            captured: false,
        }
    }

    #[inline(always)]
    pub fn is_on_board(&self) -> bool {
        !self.captured
    }
}
