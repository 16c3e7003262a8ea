use game::{
    constants::*,
    square,
    util::verify_game_state,
    ClickOutcome, Color, GameState, MoveError, PieceKind,
};
use ntest::timeout;

#[test]
fn king_pawn_opening_alternates_turns() {
    let mut state = GameState::new();

    let white_pawn = state.board.occupant_id(square!(4, 6)).unwrap();
    let moves = state.select_piece(white_pawn).unwrap();
    assert_eq!(moves.as_slice(), &[square!(4, 5), square!(4, 4)]);

    state.commit_move(square!(4, 5)).unwrap();
    verify_game_state(&state);

    assert_eq!(state.board.occupant_id(square!(4, 5)), Some(white_pawn));
    assert!(state.board.is_empty(square!(4, 6)));
    assert!(state.board.piece(white_pawn).has_moved);
    assert_eq!(state.playing, Color::Black);

    let moves = state.select_at(square!(4, 1)).unwrap();
    assert_eq!(moves.as_slice(), &[square!(4, 2), square!(4, 3)]);
}

#[test]
fn white_cannot_move_twice_in_a_row() {
    let mut state = GameState::new();

    state.select_at(square!(A, WHITE_PAWN_ROW)).unwrap();
    state.commit_move(square!(A, 4)).unwrap();

    assert!(matches!(
        state.select_at(square!(A, 4)),
        Err(MoveError::NotYourTurn { playing: Color::Black, piece: Color::White })
    ));
}

#[test]
fn capture_removes_the_occupant_from_the_grid_only() {
    let mut state = GameState::new();

    for (from, to) in [
        (square!(E, 6), square!(E, 4)),
        (square!(D, 1), square!(D, 3)),
    ] {
        state.select_at(from).unwrap();
        state.commit_move(to).unwrap();
    }

    let black_pawn = state.board.occupant_id(square!(D, 3)).unwrap();
    state.select_at(square!(E, 4)).unwrap();
    let commit = state.commit_move(square!(D, 3)).unwrap();

    assert_eq!(commit.captured, Some(black_pawn));
    assert!(state.board.piece(black_pawn).captured);
    assert!(state.roster(Color::Black).contains(&black_pawn));
    assert_eq!(state.live_pieces(Color::Black).count(), 15);
    verify_game_state(&state);

    assert_eq!(
        state.select_piece(black_pawn),
        Err(MoveError::Captured(black_pawn))
    );
}

#[test]
fn pawn_can_take_its_own_side_diagonally() {
    let mut state = GameState::empty();
    let pawn = state.add_piece(PieceKind::Pawn, Color::White, square!(3, 6));
    let knight = state.add_piece(PieceKind::Knight, Color::White, square!(4, 5));

    state.select_piece(pawn).unwrap();
    let commit = state.commit_move(square!(4, 5)).unwrap();

    assert_eq!(commit.captured, Some(knight));
    assert_eq!(state.live_pieces(Color::White).collect::<Vec<_>>(), vec![pawn]);
    verify_game_state(&state);
}

#[test]
#[timeout(2000)]
fn scripted_clicks_keep_the_state_consistent() {
    let mut state = GameState::new();
    let script = [
        square!(E, 6), square!(E, 4),
        square!(E, 1), square!(E, 3),
        square!(G, 7), square!(F, 5),
        square!(C, 0), square!(C, 0),                                           /* Pick up, put down  */
        square!(C, 0), square!(B, 2),
        square!(F, 5), square!(E, 3),
        square!(D, 0), square!(E, 1),
    ];

    let mut moves = 0;
    for square in script {
        match state.click(square).unwrap() {
            ClickOutcome::Moved(_) => moves += 1,
            ClickOutcome::Ignored => panic!("click on {square} was ignored"),
            _ => {}
        }
        verify_game_state(&state);
    }

    assert_eq!(moves, 6);
    assert_eq!(state.playing, Color::White);
    assert_eq!(state.live_pieces(Color::Black).count(), 15);
}
