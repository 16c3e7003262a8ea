//! # board.rs
//!
//! Defines the 8x8 board grid and its piece arena.
//!
//! This file contains the implementation of a `Board` struct, which owns every
//! piece of a game in an arena and maps each of the 64 squares to the id of
//! its occupant, if any. It also carries the transient highlight overlay used
//! to display the candidate moves of the selected piece, and provides
//! occupancy bitboards built with the `twiddling` helpers.
//!
//! # Date
//! 18/10/2026

use twiddling::{get_bit, set_bit, SquareSet, EMPTY};

use crate::{
    constants::*,
    representations::{
        piece::{Color, Piece, PieceId, PieceKind},
        square::Square,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub pieces: Vec<Piece>,
    pub cells: [Option<PieceId>; SQUARE_COUNT],
    pub highlighted: SquareSet,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Board {
        Board {
            pieces: Vec::with_capacity(32),
            cells: [None; SQUARE_COUNT],
            highlighted: EMPTY,
        }
    }

    /// Looks up a square by raw coordinates. Off-board is a normal `None`.
    pub fn square_at(&self, file: i8, rank: i8) -> Option<Square> {
        Square::new(file, rank)
    }

    #[inline(always)]
    pub fn occupant_id(&self, square: Square) -> Option<PieceId> {
        self.cells[square.index() as usize]
    }

    #[inline(always)]
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.occupant_id(square).map(|id| &self.pieces[id.0])
    }

    #[inline(always)]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant_id(square).is_none()
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    /// Adds a new piece to the arena and puts it on `square`.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square
    ) -> PieceId {
        assert!(
            self.is_empty(square),
            "Cannot place a {} on occupied square {square}.",
            kind.name()
        );

        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, color, square));
        self.cells[square.index() as usize] = Some(id);

        id
    }

    /// Moves a piece to `destination`, taking whatever stood there.
    ///
    /// Clears the origin cell, keeps the piece's coordinates in sync with the
    /// grid and flips a pawn's has-moved flag. Returns the id of the piece
    /// that was taken, if any.
    pub fn relocate(
        &mut self,
        id: PieceId,
        destination: Square
    ) -> Option<PieceId> {
        let origin = self.pieces[id.0].square;

        debug_assert_eq!(
            self.occupant_id(origin),
            Some(id),
            "Piece {id:?} is not where it claims to be."
        );

        self.cells[origin.index() as usize] = None;

        let taken = self.cells[destination.index() as usize].replace(id);
        if let Some(taken) = taken {
            self.pieces[taken.0].captured = true;
        }

        let piece = &mut self.pieces[id.0];
        piece.square = destination;
        if piece.kind == PieceKind::Pawn {
            piece.has_moved = true;
        }

        taken
    }

    pub fn occupied(&self) -> SquareSet {
        let mut result = EMPTY;

        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_some() {
                set_bit(&mut result, index as u32);
            }
        }

        result
    }

    pub fn occupied_by(&self, color: Color) -> SquareSet {
        let mut result = EMPTY;

        for (index, cell) in self.cells.iter().enumerate() {
            if let Some(id) = cell {
                if self.pieces[id.0].color == color {
                    set_bit(&mut result, index as u32);
                }
            }
        }

        result
    }

    /// Every occupied square with its occupant, in index order.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let square = Square::from_index(index as u32)?;
                cell.map(|id| (square, id))
            })
    }

    pub fn highlight(&mut self, squares: &SquareSet) {
        self.highlighted = *squares;
    }

    #[inline(always)]
    pub fn is_highlighted(&self, square: Square) -> bool {
        get_bit(&self.highlighted, square.index())
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted = EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square;
    use twiddling::{bit_indices, count_bits};

    #[test]
    fn square_at_treats_off_board_as_absent() {
        let board = Board::new();

        assert_eq!(board.square_at(4, 6), Some(square!(4, 6)));
        assert_eq!(board.square_at(8, 0), None);
        assert_eq!(board.square_at(0, -1), None);
    }

    #[test]
    fn place_fills_a_single_cell() {
        let mut board = Board::new();
        let id = board.place(PieceKind::Rook, Color::White, square!(A, 7));

        assert_eq!(board.occupant_id(square!(A, 7)), Some(id));
        assert_eq!(board.occupant(square!(A, 7)).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(board.is_empty(square!(B, 7)));
        assert_eq!(count_bits(&board.occupied()), 1);
    }

    #[test]
    #[should_panic(expected = "occupied square")]
    fn place_refuses_a_second_occupant() {
        let mut board = Board::new();
        board.place(PieceKind::Rook, Color::White, square!(A, 7));
        board.place(PieceKind::Knight, Color::Black, square!(A, 7));
    }

    #[test]
    fn relocate_takes_the_occupant_and_syncs_coordinates() {
        let mut board = Board::new();
        let pawn = board.place(PieceKind::Pawn, Color::White, square!(D, 6));
        let rook = board.place(PieceKind::Rook, Color::Black, square!(E, 5));

        let taken = board.relocate(pawn, square!(E, 5));

        assert_eq!(taken, Some(rook));
        assert!(board.piece(rook).captured);
        assert!(board.is_empty(square!(D, 6)));
        assert_eq!(board.occupant_id(square!(E, 5)), Some(pawn));
        assert_eq!(board.piece(pawn).square, square!(E, 5));
        assert!(board.piece(pawn).has_moved);
    }

    #[test]
    fn relocate_leaves_non_pawns_unflagged() {
        let mut board = Board::new();
        let knight = board.place(PieceKind::Knight, Color::Black, square!(B, 0));

        assert_eq!(board.relocate(knight, square!(C, 2)), None);
        assert!(!board.piece(knight).has_moved);
    }

    #[test]
    fn occupancy_is_split_by_color() {
        let mut board = Board::new();
        board.place(PieceKind::King, Color::White, square!(E, 7));
        board.place(PieceKind::King, Color::Black, square!(E, 0));

        assert_eq!(bit_indices(&board.occupied_by(Color::White)), vec![60]);
        assert_eq!(bit_indices(&board.occupied_by(Color::Black)), vec![4]);
        assert_eq!(board.occupants().count(), 2);
    }

    #[test]
    fn highlights_are_transient() {
        let mut board = Board::new();
        let mut first = EMPTY;
        set_bit(&mut first, square!(C, 3).index());
        set_bit(&mut first, square!(C, 4).index());
        board.highlight(&first);

        let mut second = EMPTY;
        set_bit(&mut second, square!(C, 3).index());
        board.highlight(&second);

        assert!(board.is_highlighted(square!(C, 3)));
        assert!(!board.is_highlighted(square!(C, 4)));

        board.clear_highlights();
        assert!(!board.is_highlighted(square!(C, 3)));
    }
}
