//! Check detection.

use tracing::warn;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{pattern_allows, pawn_attacks};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Return `true` if `color`'s king is attacked.
///
/// A board without a `color` king reports "not in check". Legal play never
/// produces such a board.
pub fn king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_attacked(board, king_sq, color.flip()),
        None => {
            warn!(%color, "no king on board, treating as not in check");
            false
        }
    }
}

/// Return `true` if any piece of `by` attacks `target`.
///
/// Pawns use their diagonal attack geometry; every other kind uses its
/// movement pattern, which is equivalent when `target` holds an enemy piece.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    board.pieces(by).any(|(from, piece)| match piece.kind() {
        PieceKind::Pawn => pawn_attacks(by, from, target),
        _ => pattern_allows(board, piece, from, target),
    })
}

#[cfg(test)]
mod tests {
    use super::{is_attacked, king_in_check};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_has_no_check() {
        let board = Board::starting_position();
        assert!(!king_in_check(&board, Color::White));
        assert!(!king_in_check(&board, Color::Black));
    }

    #[test]
    fn rook_check_and_block() {
        let mut board = Board::from_pieces([
            (Square::E1, Piece::WHITE_KING),
            (Square::E8, Piece::BLACK_ROOK),
            (Square::A8, Piece::BLACK_KING),
        ]);
        assert!(king_in_check(&board, Color::White));
        board.place(Square::E4, Piece::WHITE_BISHOP);
        assert!(!king_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_checks_diagonally_only() {
        let board = Board::from_pieces([
            (Square::E4, Piece::WHITE_KING.moved()),
            (Square::D5, Piece::BLACK_PAWN.moved()),
        ]);
        assert!(king_in_check(&board, Color::White));

        let board = Board::from_pieces([
            (Square::E4, Piece::WHITE_KING.moved()),
            (Square::E5, Piece::BLACK_PAWN.moved()),
        ]);
        assert!(!king_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_attacks_empty_squares() {
        let board = Board::from_pieces([(Square::D7, Piece::BLACK_PAWN)]);
        assert!(is_attacked(&board, Square::C6, Color::Black));
        assert!(is_attacked(&board, Square::E6, Color::Black));
        assert!(!is_attacked(&board, Square::D6, Color::Black));
    }

    #[test]
    fn knight_and_king_checks() {
        let board = Board::from_pieces([
            (Square::E1, Piece::WHITE_KING),
            (Square::F3, Piece::BLACK_KNIGHT),
        ]);
        assert!(king_in_check(&board, Color::White));

        let board = Board::from_pieces([
            (Square::E4, Piece::WHITE_KING.moved()),
            (Square::E5, Piece::BLACK_KING.moved()),
        ]);
        assert!(king_in_check(&board, Color::White));
        assert!(king_in_check(&board, Color::Black));
    }

    #[test]
    fn unmoved_king_does_not_attack_two_files_away() {
        let board = Board::from_pieces([
            (Square::E8, Piece::BLACK_KING),
            (Square::C8, Piece::WHITE_KING.moved()),
        ]);
        assert!(!king_in_check(&board, Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::from_pieces([(Square::D1, Piece::BLACK_QUEEN)]);
        assert!(!king_in_check(&board, Color::White));
    }
}
