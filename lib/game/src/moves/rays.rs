//! # rays.rs
//!
//! Implements ray casting for sliding pieces.
//!
//! This file contains the `Ray` iterator, which walks from a square in one
//! fixed direction and yields every square a piece of the given color could
//! slide to: empty squares, then at most one enemy square, never a friendly
//! one. Rooks use the orthogonal rays, bishops the diagonal rays and queens
//! both. The single step check is shared with the offset pieces.
//!
//! # Date
//! 18/10/2026

use std::iter::FusedIterator;

use crate::{
    constants::*,
    representations::{board::Board, piece::Color, square::Square},
};

/// Resolves one displacement from `from` for a piece of `color`.
///
/// Off-board and friendly-occupied targets yield `None`; empty and enemy
/// squares are returned.
#[inline(always)]
pub fn step_target(
    board: &Board,
    from: Square,
    color: Color,
    (file_delta, rank_delta): (i8, i8)
) -> Option<Square> {
    let target = from.offset(file_delta, rank_delta)?;

    match board.occupant(target) {
        Some(piece) if piece.color == color => None,
        _ => Some(target),
    }
}

/// A lazy walk along one direction. Consumed once; yields nothing after it
/// stops.
#[derive(Debug, Clone)]
pub struct Ray<'a> {
    board: &'a Board,
    color: Color,
    cursor: Square,
    direction: (i8, i8),
    stopped: bool,
}

impl<'a> Ray<'a> {
    pub fn new(
        board: &'a Board,
        origin: Square,
        color: Color,
        direction: (i8, i8)
    ) -> Self {
        debug_assert!(direction != (0, 0), "A ray needs a direction.");

        Self {
            board,
            color,
            cursor: origin,
            direction,
            stopped: false,
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.stopped {
            return None;
        }

        let Some(target) = step_target(
            self.board, self.cursor, self.color, self.direction
        ) else {
            self.stopped = true;                                                /* Edge or friendly blocker           */
            return None;
        };

        if self.board.occupant(target).is_some() {
            self.stopped = true;                                                /* Capture ends the ray               */
        }

        self.cursor = target;
        Some(target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stopped {
            (0, Some(0))
        } else {
            (0, Some(BOARD_SIZE as usize - 1))
        }
    }
}

impl FusedIterator for Ray<'_> {}

fn cast<'a>(
    board: &'a Board,
    origin: Square,
    color: Color,
    directions: &'static [(i8, i8)]
) -> impl Iterator<Item = Square> + 'a {
    directions
        .iter()
        .flat_map(move |&direction| Ray::new(board, origin, color, direction))
}

/// The four diagonal rays: +/+, +/-, -/+, -/-.
pub fn diagonal_rays<'a>(
    board: &'a Board,
    origin: Square,
    color: Color
) -> impl Iterator<Item = Square> + 'a {
    cast(board, origin, color, &DIAGONAL_DIRECTIONS)
}

/// The four orthogonal rays: +file, -file, +rank, -rank.
pub fn orthogonal_rays<'a>(
    board: &'a Board,
    origin: Square,
    color: Color
) -> impl Iterator<Item = Square> + 'a {
    cast(board, origin, color, &ORTHOGONAL_DIRECTIONS)
}
