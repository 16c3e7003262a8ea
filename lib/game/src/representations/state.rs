//! # state.rs
//!
//! Defines game state representation and management.
//!
//! This file contains the `GameState` struct, which ties the board grid to
//! the per-color piece rosters, the side to move and the current selection.
//! The operations that change it live in `moves::apply`.
//!
//! # Date
//! 18/10/2026

use crate::{
    constants::*,
    moves::move_list::MoveList,
    representations::{
        board::Board,
        piece::{Color, PieceId, PieceKind},
        square::Square,
    },
    square,
};

/// The selected piece together with the candidates computed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub piece: PieceId,
    pub candidates: MoveList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,

    pub rosters: [Vec<PieceId>; 2],                                             /* Indexed by Color::index()          */
    pub playing: Color,
    pub selected: Option<Selection>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard starting position with White to move.
    pub fn new() -> Self {
        let mut state = Self::empty();
        state.setup();
        state
    }

    /// An empty board with White to move.
    pub fn empty() -> Self {
        GameState {
            board: Board::new(),
            rosters: [Vec::with_capacity(16), Vec::with_capacity(16)],
            playing: Color::White,
            selected: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn setup(&mut self) {
        for (file, kind) in WHITE_BACK_RANK.iter().enumerate() {
            self.add_piece(*kind, Color::White, square!(file, WHITE_BACK_ROW));
        }

        for file in A..=H {
            self.add_piece(PieceKind::Pawn, Color::White, square!(file, WHITE_PAWN_ROW));
        }

        for (file, kind) in BLACK_BACK_RANK.iter().enumerate() {
            self.add_piece(*kind, Color::Black, square!(file, BLACK_BACK_ROW));
        }

        for file in A..=H {
            self.add_piece(PieceKind::Pawn, Color::Black, square!(file, BLACK_PAWN_ROW));
        }
    }

    /// Places a new piece and enrolls it on its color's roster.
    pub fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square
    ) -> PieceId {
        let id = self.board.place(kind, color, square);
        self.rosters[color.index()].push(id);
        id
    }

    pub fn roster(&self, color: Color) -> &[PieceId] {
        &self.rosters[color.index()]
    }

    /// Roster entries that are still on the grid.
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.roster(color)
            .iter()
            .copied()
            .filter(|id| self.board.piece(*id).is_on_board())
    }

    /// Whether `id` may be picked up this turn.
    pub fn is_selectable(&self, id: PieceId) -> bool {
        let piece = self.board.piece(id);
        piece.color == self.playing && piece.is_on_board()
    }

    pub fn selected_piece(&self) -> Option<PieceId> {
        self.selected.as_ref().map(|selection| selection.piece)
    }

    pub fn candidates(&self) -> Option<&MoveList> {
        self.selected.as_ref().map(|selection| &selection.candidates)
    }
}
