//! Castling validation.

use crate::board::Board;
use crate::chess_move::{CastleSide, Move};
use crate::file::File;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

use super::check::king_in_check;

/// Decide a castling move completely, king safety included.
///
/// Requires an unmoved king on its home square, an unmoved rook of the same
/// color on the matching corner, empty squares strictly between them, a king
/// not currently in check, and no attack on any square the king stands on,
/// passes or lands on. Each square is probed by teleporting only the king.
pub(super) fn is_valid_castle(board: &Board, mv: &Move) -> bool {
    let king = mv.piece();
    let color = king.color();
    let from = mv.source();

    if king.kind() != PieceKind::King || king.has_moved() {
        return false;
    }
    if from != Square::new(Rank::back_rank(color), File::FileE) || mv.dest().rank() != from.rank() {
        return false;
    }
    let Some(side) = CastleSide::from_king_dest(mv.dest().file()) else {
        return false;
    };

    let rook_sq = Square::new(from.rank(), side.rook_origin());
    let rook_ok = board.get(rook_sq).is_some_and(|rook| {
        rook.kind() == PieceKind::Rook && rook.color() == color && !rook.has_moved()
    });
    if !rook_ok {
        return false;
    }

    let step: i8 = match side {
        CastleSide::King => 1,
        CastleSide::Queen => -1,
    };

    let mut cursor = from.offset(step, 0);
    while let Some(sq) = cursor {
        if sq == rook_sq {
            break;
        }
        if board.is_occupied(sq) {
            return false;
        }
        cursor = sq.offset(step, 0);
    }

    if king_in_check(board, color) {
        return false;
    }

    (0..=2).all(|i| {
        let Some(probe_sq) = from.offset(step * i, 0) else {
            return false;
        };
        let mut probe = *board;
        probe.clear(from);
        probe.place(probe_sq, king);
        !king_in_check(&probe, color)
    })
}
