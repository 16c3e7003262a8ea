//! # piece_io.rs
//!
//! Implements piece symbols and piece formatting functions.
//!
//! Symbols follow the usual letters (`K Q R B N P`), upper case for White and
//! lower case for Black. `format_piece` lays a piece's record out as a column
//! with Unicode box-drawing characters.
//!
//! # Date
//! 18/10/2026

use game::{Color, Piece, PieceKind};

use crate::board_io::format_square;

pub fn piece_symbol(piece: &Piece) -> char {
    let symbol = match piece.kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        PieceKind::Pawn => 'P',
    };

    match piece.color {
        Color::White => symbol,
        Color::Black => symbol.to_ascii_lowercase(),
    }
}

pub fn piece_from_symbol(symbol: char) -> Option<(PieceKind, Color)> {
    let kind = match symbol.to_ascii_uppercase() {
        'K' => PieceKind::King,
        'Q' => PieceKind::Queen,
        'R' => PieceKind::Rook,
        'B' => PieceKind::Bishop,
        'N' => PieceKind::Knight,
        'P' => PieceKind::Pawn,
        _ => return None,
    };

    let color = if symbol.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    Some((kind, color))
}

/// Formats a piece as a column with one row per property:
/// name, symbol, color, square, has-moved and captured flags.
pub fn format_piece(piece: &Piece) -> String {
    let rows = [
        piece.kind.name().to_string(),
        piece_symbol(piece).to_string(),
        format!("{:?}", piece.color),
        if piece.captured { "-".to_string() } else { format_square(piece.square) },
        if piece.has_moved { "moved" } else { "" }.to_string(),
        if piece.captured { "captured" } else { "" }.to_string(),
    ];

    const FIXED_WIDTH: usize = 10;

    let mut result = String::new();
    result.push_str(&format!("┌{}┐\n", "─".repeat(FIXED_WIDTH + 2)));

    for row in rows {
        result.push_str(&format!("│ {:^FIXED_WIDTH$} │\n", row));
    }

    result.push_str(&format!("└{}┘", "─".repeat(FIXED_WIDTH + 2)));

    result
}
