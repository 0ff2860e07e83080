//! Sliding patterns: bishop, rook and queen.

use crate::board::Board;
use crate::square::Square;

/// Diagonal ray with nothing in between.
pub(super) fn bishop_pattern(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df != 0 && df.abs() == dr.abs() && ray_is_clear(board, from, to)
}

/// Straight ray with nothing in between.
pub(super) fn rook_pattern(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    (df == 0) != (dr == 0) && ray_is_clear(board, from, to)
}

pub(super) fn queen_pattern(board: &Board, from: Square, to: Square) -> bool {
    bishop_pattern(board, from, to) || rook_pattern(board, from, to)
}

/// Every square strictly between `from` and `to` is empty.
///
/// The two squares must share a rank, file or diagonal.
pub(crate) fn ray_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    let step = (df.signum(), dr.signum());
    let mut cursor = from.offset(step.0, step.1);
    while let Some(sq) = cursor {
        if sq == to {
            return true;
        }
        if board.is_occupied(sq) {
            return false;
        }
        cursor = sq.offset(step.0, step.1);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{bishop_pattern, queen_pattern, ray_is_clear, rook_pattern};
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn rook_rays_stop_at_blockers() {
        let board = Board::from_pieces([
            (Square::A1, Piece::WHITE_ROOK),
            (Square::A4, Piece::BLACK_PAWN),
        ]);
        assert!(rook_pattern(&board, Square::A1, Square::A4));
        assert!(!rook_pattern(&board, Square::A1, Square::A5));
        assert!(rook_pattern(&board, Square::A1, Square::H1));
        assert!(!rook_pattern(&board, Square::A1, Square::B2));
    }

    #[test]
    fn bishop_rays_stop_at_blockers() {
        let board = Board::from_pieces([
            (Square::C1, Piece::WHITE_BISHOP),
            (Square::E3, Piece::WHITE_PAWN),
        ]);
        assert!(bishop_pattern(&board, Square::C1, Square::D2));
        assert!(!bishop_pattern(&board, Square::C1, Square::F4));
        assert!(bishop_pattern(&board, Square::C1, Square::A3));
        assert!(!bishop_pattern(&board, Square::C1, Square::C4));
    }

    #[test]
    fn queen_is_union() {
        let board = Board::from_pieces([(Square::D4, Piece::WHITE_QUEEN)]);
        let reachable = Square::all().filter(|&to| queen_pattern(&board, Square::D4, to)).count();
        assert_eq!(reachable, 27);
        assert!(!queen_pattern(&board, Square::D4, Square::E6));
    }

    #[test]
    fn adjacent_ray_is_trivially_clear() {
        let board = Board::starting_position();
        assert!(ray_is_clear(&board, Square::E1, Square::E2));
    }
}
