//! # move_gen.rs
//!
//! Implements candidate move generation for every piece kind.
//!
//! This file dispatches on `PieceKind` to produce the candidate set of a
//! piece from its current square. Sliding pieces delegate to the ray caster,
//! knights and kings resolve a fixed offset table, and pawns follow their own
//! color-dependent rules. These are movement rules only: nothing here looks
//! at checks, castling, en passant or promotion.
//!
//! # Date
//! 18/10/2026

use log::trace;

use crate::{
    constants::*,
    moves::{
        move_list::MoveList,
        rays::{diagonal_rays, orthogonal_rays, step_target},
    },
    representations::{
        board::Board,
        piece::{Piece, PieceId, PieceKind},
    },
};

/// Candidate destinations of the piece `id`, in emission order.
///
/// A captured piece has no candidates.
pub fn candidate_moves(board: &Board, id: PieceId) -> MoveList {
    let piece = board.piece(id);
    let mut moves = MoveList::new();

    if !piece.is_on_board() {
        return moves;
    }

    let (from, color) = (piece.square, piece.color);

    match piece.kind {
        PieceKind::Rook => {
            moves.extend(orthogonal_rays(board, from, color));
        }
        PieceKind::Bishop => {
            moves.extend(diagonal_rays(board, from, color));
        }
        PieceKind::Queen => {
            moves.extend(diagonal_rays(board, from, color));
            moves.extend(orthogonal_rays(board, from, color));
        }
        PieceKind::Knight => offset_moves(board, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => offset_moves(board, piece, &KING_OFFSETS, &mut moves),
        PieceKind::Pawn => pawn_moves(board, piece, &mut moves),
    }

    trace!(
        "{:?} {} at {from}: {} candidates",
        color,
        piece.kind.name(),
        moves.len()
    );

    moves
}

fn offset_moves(
    board: &Board,
    piece: &Piece,
    offsets: &[(i8, i8)],
    moves: &mut MoveList
) {
    moves.extend(
        offsets
            .iter()
            .filter_map(|&offset| {
                step_target(board, piece.square, piece.color, offset)
            })
    );
}

/// Pawn rules. Note that the diagonal squares accept any occupant, friendly
/// or not.
fn pawn_moves(board: &Board, piece: &Piece, moves: &mut MoveList) {
    let forward = piece.color.forward();
    let from = piece.square;

    if let Some(one) = from.offset(0, forward) {
        if board.is_empty(one) {
            moves.push(one);

            if !piece.has_moved {
                if let Some(two) = from.offset(0, 2 * forward) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for file_delta in [1, -1] {
        if let Some(diagonal) = from.offset(file_delta, forward) {
            if !board.is_empty(diagonal) {
                moves.push(diagonal);
            }
        }
    }
}
