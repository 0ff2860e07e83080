//! Castling, en passant and promotion through the game interface.

use gambit_core::{Board, Color, Piece, PieceKind, Square};
use gambit_game::{Game, GameConfig, ManualTime, MoveError};

fn game_at(board: Board, to_move: Color) -> Game<ManualTime> {
    Game::from_position(board, to_move, GameConfig::default(), ManualTime::new()).unwrap()
}

fn castling_setup(extra: &[(Square, Piece)]) -> Board {
    let mut board = Board::from_pieces([
        (Square::E1, Piece::WHITE_KING),
        (Square::H1, Piece::WHITE_ROOK),
        (Square::A1, Piece::WHITE_ROOK),
        (Square::E8, Piece::BLACK_KING),
    ]);
    for &(sq, piece) in extra {
        board.place(sq, piece);
    }
    board
}

fn castle_rejected(board: Board, to: Square) {
    let mut game = game_at(board, Color::White);
    let err = game.attempt_move(Square::E1, to, None).unwrap_err();
    assert!(matches!(err, MoveError::Illegal { .. }), "{err}");
    assert_eq!(game.board(), &board);
}

#[test]
fn kingside_castle_moves_both_pieces() {
    let mut game = game_at(castling_setup(&[]), Color::White);
    let mv = game.attempt_move(Square::E1, Square::G1, None).unwrap();
    assert!(mv.is_castle());
    assert_eq!(game.board().get(Square::G1), Some(Piece::WHITE_KING.moved()));
    assert_eq!(game.board().get(Square::F1), Some(Piece::WHITE_ROOK.moved()));
    assert_eq!(game.board().get(Square::H1), None);
    assert_eq!(game.formatted_history(), ["O-O"]);

    game.undo();
    assert_eq!(game.board(), &castling_setup(&[]));
}

#[test]
fn queenside_castle() {
    let mut game = game_at(castling_setup(&[]), Color::White);
    game.attempt_move(Square::E1, Square::C1, None).unwrap();
    assert_eq!(game.board().get(Square::C1), Some(Piece::WHITE_KING.moved()));
    assert_eq!(game.board().get(Square::D1), Some(Piece::WHITE_ROOK.moved()));
    assert_eq!(game.formatted_history(), ["O-O-O"]);
}

#[test]
fn castle_rejected_after_rook_moved() {
    let mut board = castling_setup(&[]);
    board.place(Square::H1, Piece::WHITE_ROOK.moved());
    castle_rejected(board, Square::G1);
}

#[test]
fn castle_rejected_after_rook_moved_and_returned() {
    let mut game = game_at(castling_setup(&[]), Color::White);
    game.attempt_move(Square::H1, Square::H2, None).unwrap();
    game.attempt_move(Square::E8, Square::D8, None).unwrap();
    game.attempt_move(Square::H2, Square::H1, None).unwrap();
    game.attempt_move(Square::D8, Square::E8, None).unwrap();
    let err = game.attempt_move(Square::E1, Square::G1, None).unwrap_err();
    assert!(matches!(err, MoveError::Illegal { .. }));
    assert!(game.attempt_move(Square::E1, Square::C1, None).is_ok());
}

#[test]
fn castle_rejected_with_piece_between() {
    castle_rejected(castling_setup(&[(Square::B1, Piece::WHITE_KNIGHT)]), Square::C1);
}

#[test]
fn castle_rejected_in_check() {
    castle_rejected(castling_setup(&[(Square::E4, Piece::BLACK_ROOK)]), Square::G1);
}

#[test]
fn castle_rejected_through_attacked_square() {
    castle_rejected(castling_setup(&[(Square::D5, Piece::BLACK_ROOK)]), Square::C1);
}

#[test]
fn castle_rejected_onto_attacked_square() {
    castle_rejected(castling_setup(&[(Square::G4, Piece::BLACK_ROOK)]), Square::G1);
}

#[test]
fn en_passant_only_immediately() {
    let mut game = Game::with_time_source(GameConfig::default(), ManualTime::new());
    for (from, to) in [
        (Square::E2, Square::E4),
        (Square::A7, Square::A6),
        (Square::E4, Square::E5),
        (Square::D7, Square::D5),
    ] {
        game.attempt_move(from, to, None).unwrap();
    }
    assert!(game.legal_destinations(Square::E5).contains(Square::D6));

    // Delay the capture by one move pair.
    game.attempt_move(Square::H2, Square::H3, None).unwrap();
    game.attempt_move(Square::H7, Square::H6, None).unwrap();
    assert!(!game.legal_destinations(Square::E5).contains(Square::D6));
    let err = game.attempt_move(Square::E5, Square::D6, None).unwrap_err();
    assert!(matches!(err, MoveError::Illegal { .. }));
}

#[test]
fn en_passant_capture_removes_pawn() {
    let mut game = Game::with_time_source(GameConfig::default(), ManualTime::new());
    for (from, to) in [
        (Square::E2, Square::E4),
        (Square::A7, Square::A6),
        (Square::E4, Square::E5),
        (Square::D7, Square::D5),
    ] {
        game.attempt_move(from, to, None).unwrap();
    }
    let before = *game.board();

    let mv = game.attempt_move(Square::E5, Square::D6, None).unwrap();
    assert!(mv.is_en_passant());
    assert_eq!(mv.captured(), Some(Piece::BLACK_PAWN.moved()));
    assert_eq!(game.board().get(Square::D5), None);
    assert_eq!(game.board().get(Square::D6), Some(Piece::WHITE_PAWN.moved()));
    assert_eq!(game.formatted_history().last().map(String::as_str), Some("exd6 e.p."));

    game.undo();
    assert_eq!(game.board(), &before);
}

fn promotion_board() -> Board {
    Board::from_pieces([
        (Square::A1, Piece::WHITE_KING.moved()),
        (Square::H6, Piece::BLACK_KING.moved()),
        (Square::C7, Piece::WHITE_PAWN.moved()),
        (Square::D8, Piece::BLACK_ROOK.moved()),
    ])
}

#[test]
fn promotion_requires_a_choice() {
    let mut game = game_at(promotion_board(), Color::White);
    let err = game.attempt_move(Square::C7, Square::C8, None).unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(err, MoveError::Classify(_)));
    assert_eq!(game.board(), &promotion_board());
    assert_eq!(game.current_turn(), Color::White);
}

#[test]
fn promotion_rejects_king() {
    let mut game = game_at(promotion_board(), Color::White);
    let err = game.attempt_move(Square::C7, Square::C8, Some(PieceKind::King)).unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(game.board(), &promotion_board());
}

#[test]
fn promotion_places_chosen_piece() {
    let mut game = game_at(promotion_board(), Color::White);
    let mv = game
        .attempt_move(Square::C7, Square::D8, Some(PieceKind::Knight))
        .unwrap();
    assert!(mv.is_promotion());
    assert_eq!(mv.captured(), Some(Piece::BLACK_ROOK.moved()));
    assert_eq!(game.board().get(Square::D8), Some(Piece::WHITE_KNIGHT));
    assert_eq!(game.board().get(Square::C7), None);
    assert_eq!(game.formatted_history(), ["cxd8=N"]);

    game.undo();
    assert_eq!(game.board(), &promotion_board());
}
