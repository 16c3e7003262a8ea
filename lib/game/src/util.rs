//! # util.rs
//!
//! Provides consistency checks over a game state.
//!
//! `verify_game_state` recomputes what the rosters, the grid and the piece
//! records imply about each other and panics with a description of the first
//! mismatch. It is meant for tests and debug builds.
//!
//! # Date
//! 18/10/2026

use twiddling::{bit_indices, set_bit, EMPTY};

use crate::representations::{
    piece::{Color, PieceId},
    square::Square,
    state::GameState,
};

pub fn verify_game_state(state: &GameState) {
    let board = &state.board;
    let mut seen = vec![0u8; board.pieces.len()];

    for color in [Color::White, Color::Black] {
        for id in state.roster(color) {
            assert!(
                id.0 < board.pieces.len(),
                "Roster of {color:?} lists unknown piece {id:?}"
            );
            assert_eq!(
                board.piece(*id).color,
                color,
                "Piece {id:?} is on the roster of the wrong color"
            );
            seen[id.0] += 1;
        }
    }

    for (index, count) in seen.iter().enumerate() {
        assert_eq!(
            *count, 1,
            "Piece {:?} appears on {} rosters", PieceId(index), count
        );
    }

    for (square, id) in board.occupants() {
        let piece = board.piece(id);

        assert!(
            piece.is_on_board(),
            "Captured piece {id:?} still occupies {square}"
        );
        assert_eq!(
            piece.square, square,
            "Piece {id:?} thinks it is on {} but sits on {square}",
            piece.square
        );
    }

    let mut computed = [EMPTY, EMPTY];

    for color in [Color::White, Color::Black] {
        for id in state.live_pieces(color) {
            let square = board.piece(id).square;
            assert_eq!(
                board.occupant_id(square),
                Some(id),
                "Live piece {id:?} is missing from {square}"
            );
            set_bit(&mut computed[color.index()], square.index());
        }

        let expected = board.occupied_by(color);
        assert_eq!(
            computed[color.index()], expected,
            "Occupancy of {color:?} doesn't match: {:?} vs {:?}",
            bit_indices(&computed[color.index()])
                .into_iter()
                .filter_map(Square::from_index)
                .collect::<Vec<_>>(),
            bit_indices(&expected)
                .into_iter()
                .filter_map(Square::from_index)
                .collect::<Vec<_>>(),
        );
    }

    assert_eq!(
        computed[0] | computed[1],
        board.occupied(),
        "Grid holds pieces that no live roster entry accounts for"
    );

    if let Some(selection) = &state.selected {
        assert!(
            state.is_selectable(selection.piece),
            "Selected piece {:?} does not belong to {:?}",
            selection.piece,
            state.playing
        );
        assert_eq!(
            &board.highlighted,
            selection.candidates.members(),
            "Highlights don't match the selection's candidates"
        );
    }
}
