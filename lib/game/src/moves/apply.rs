//! # apply.rs
//!
//! Implements piece selection, move commitment and turn alternation.
//!
//! This file contains the operations that drive one turn:
//! `Idle -> Selected(piece, candidates) -> Idle`. Selecting a piece computes
//! and highlights its candidates, committing moves it to one of them (taking
//! any occupant) and hands the turn over. `click` layers the point-and-click
//! behaviour of a board view on top of these.
//!
//! # Date
//! 18/10/2026

use log::debug;
use thiserror::Error;

use crate::{
    moves::{move_gen::candidate_moves, move_list::MoveList},
    representations::{
        piece::{Color, PieceId},
        square::Square,
        state::{GameState, Selection},
    },
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("it is {playing:?}'s turn, the piece is {piece:?}")]
    NotYourTurn { playing: Color, piece: Color },
    #[error("piece {0:?} has been captured")]
    Captured(PieceId),
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("no piece is selected")]
    NoSelection,
    #[error("{0} is not a candidate destination")]
    NotACandidate(Square),
}

/// A move that has been carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(PieceId),
    Deselected,
    Moved(Commit),
    Ignored,
}

impl GameState {
    /// Selects one of the side to move's pieces and highlights its
    /// candidates. Any previous selection is replaced.
    pub fn select_piece(&mut self, id: PieceId) -> Result<&MoveList, MoveError> {
        let piece = self.board.piece(id);

        if piece.color != self.playing {
            return Err(MoveError::NotYourTurn {
                playing: self.playing,
                piece: piece.color,
            });
        }

        if !piece.is_on_board() {
            return Err(MoveError::Captured(id));
        }

        let candidates = candidate_moves(&self.board, id);

        debug!(
            "Selected {:?} {} at {}: {} candidates",
            piece.color,
            piece.kind.name(),
            piece.square,
            candidates.len()
        );

        self.board.highlight(candidates.members());

        let selection = self.selected.insert(Selection { piece: id, candidates });
        Ok(&selection.candidates)
    }

    pub fn select_at(&mut self, square: Square) -> Result<&MoveList, MoveError> {
        let id = self.board
            .occupant_id(square)
            .ok_or(MoveError::EmptySquare(square))?;

        self.select_piece(id)
    }

    /// Re-selecting the selected piece drops the selection instead, leaving
    /// the turn unchanged. Returns `None` in that case.
    pub fn toggle_select(
        &mut self,
        id: PieceId
    ) -> Result<Option<&MoveList>, MoveError> {
        if self.selected_piece() == Some(id) {
            self.deselect();
            return Ok(None);
        }

        self.select_piece(id).map(Some)
    }

    pub fn deselect(&mut self) {
        if let Some(selection) = self.selected.take() {
            debug!("Deselected piece {:?}", selection.piece);
        }

        self.board.clear_highlights();
    }

    /// Moves the selected piece to `destination` and passes the turn.
    ///
    /// `destination` must be one of the selection's candidates; anything else
    /// is rejected without touching the board.
    pub fn commit_move(&mut self, destination: Square) -> Result<Commit, MoveError> {
        let selection = self.selected.as_ref().ok_or(MoveError::NoSelection)?;

        if !selection.candidates.contains(destination) {
            return Err(MoveError::NotACandidate(destination));
        }

        let id = selection.piece;
        let from = self.board.piece(id).square;
        let captured = self.board.relocate(id, destination);

        self.selected = None;
        self.board.clear_highlights();
        self.playing = self.playing.opposite();

        debug!(
            "Moved {id:?} {from} -> {destination}{}, {:?} to play",
            if captured.is_some() { " (capture)" } else { "" },
            self.playing
        );

        Ok(Commit { piece: id, from, to: destination, captured })
    }

    /// Interprets a click on `square` the way a board view does.
    ///
    /// A highlighted square commits the selected piece there. A piece of the
    /// side to move is selected, or deselected if it already was. Everything
    /// else is ignored and the selection is kept.
    pub fn click(&mut self, square: Square) -> Result<ClickOutcome, MoveError> {
        if self.selected.is_some() && self.board.is_highlighted(square) {
            return self.commit_move(square).map(ClickOutcome::Moved);
        }

        match self.board.occupant_id(square) {
            Some(id) if self.is_selectable(id) => {
                Ok(match self.toggle_select(id)? {
                    Some(_) => ClickOutcome::Selected(id),
                    None => ClickOutcome::Deselected,
                })
            }
            _ => Ok(ClickOutcome::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::*, square};

    #[test]
    fn select_highlights_candidates() {
        let mut state = GameState::new();
        let moves = state.select_at(square!(E, WHITE_PAWN_ROW)).unwrap().clone();

        assert_eq!(moves.as_slice(), &[square!(E, 5), square!(E, 4)]);
        assert!(state.board.is_highlighted(square!(E, 5)));
        assert!(state.board.is_highlighted(square!(E, 4)));
        assert!(!state.board.is_highlighted(square!(E, 3)));
    }

    #[test]
    fn select_rejects_the_waiting_side() {
        let mut state = GameState::new();

        assert_eq!(
            state.select_at(square!(E, BLACK_PAWN_ROW)),
            Err(MoveError::NotYourTurn {
                playing: Color::White,
                piece: Color::Black,
            })
        );
        assert_eq!(
            state.select_at(square!(E, 4)),
            Err(MoveError::EmptySquare(square!(E, 4)))
        );
        assert!(state.selected.is_none());
    }

    #[test]
    fn toggle_twice_returns_to_idle() {
        let mut state = GameState::new();
        let knight = state.board.occupant_id(square!(G, WHITE_BACK_ROW)).unwrap();

        assert!(state.toggle_select(knight).unwrap().is_some());
        assert_eq!(state.toggle_select(knight), Ok(None));
        assert!(state.selected.is_none());
        assert_eq!(state.board.highlighted, twiddling::EMPTY);
        assert_eq!(state.playing, Color::White);
    }

    #[test]
    fn commit_without_selection_fails() {
        let mut state = GameState::new();

        assert_eq!(
            state.commit_move(square!(E, 5)),
            Err(MoveError::NoSelection)
        );
    }

    #[test]
    fn commit_to_non_candidate_leaves_board_untouched() {
        let mut state = GameState::new();
        state.select_at(square!(E, WHITE_PAWN_ROW)).unwrap();
        let before = state.board.clone();

        assert_eq!(
            state.commit_move(square!(E, 3)),
            Err(MoveError::NotACandidate(square!(E, 3)))
        );
        assert_eq!(state.board, before);
        assert_eq!(state.playing, Color::White);
        assert!(state.selected.is_some());
    }

    #[test]
    fn commit_moves_and_passes_the_turn() {
        let mut state = GameState::new();
        let pawn = state.board.occupant_id(square!(E, WHITE_PAWN_ROW)).unwrap();
        state.select_piece(pawn).unwrap();

        let commit = state.commit_move(square!(E, 4)).unwrap();

        assert_eq!(
            commit,
            Commit {
                piece: pawn,
                from: square!(E, WHITE_PAWN_ROW),
                to: square!(E, 4),
                captured: None,
            }
        );
        assert_eq!(state.playing, Color::Black);
        assert!(state.selected.is_none());
        assert!(state.board.piece(pawn).has_moved);
        assert_eq!(state.board.highlighted, twiddling::EMPTY);
    }

    #[test]
    fn click_flow_selects_moves_and_ignores() {
        let mut state = GameState::new();

        assert_eq!(state.click(square!(D, 3)), Ok(ClickOutcome::Ignored));
        assert_eq!(state.click(square!(D, BLACK_PAWN_ROW)), Ok(ClickOutcome::Ignored));

        let knight = state.board.occupant_id(square!(B, WHITE_BACK_ROW)).unwrap();
        assert_eq!(state.click(square!(B, WHITE_BACK_ROW)), Ok(ClickOutcome::Selected(knight)));
        assert_eq!(state.click(square!(B, 4)), Ok(ClickOutcome::Ignored));
        assert_eq!(state.selected_piece(), Some(knight));

        match state.click(square!(C, 5)) {
            Ok(ClickOutcome::Moved(commit)) => assert_eq!(commit.to, square!(C, 5)),
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(state.playing, Color::Black);
    }

    #[test]
    fn clicking_another_own_piece_switches_selection() {
        let mut state = GameState::new();
        let a_pawn = state.board.occupant_id(square!(A, WHITE_PAWN_ROW)).unwrap();
        let h_pawn = state.board.occupant_id(square!(H, WHITE_PAWN_ROW)).unwrap();

        state.click(square!(A, WHITE_PAWN_ROW)).unwrap();
        assert_eq!(state.click(square!(H, WHITE_PAWN_ROW)), Ok(ClickOutcome::Selected(h_pawn)));
        assert_ne!(state.selected_piece(), Some(a_pawn));
        assert!(!state.board.is_highlighted(square!(A, 5)));
        assert!(state.board.is_highlighted(square!(H, 5)));
    }
}
