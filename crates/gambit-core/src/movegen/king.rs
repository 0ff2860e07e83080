//! King pattern.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// One step in any direction, or a two-file slide along the rank that marks
/// a castling candidate.
///
/// The castling candidate only requires an unmoved king and an empty
/// destination; whether the castle is actually allowed is decided by the
/// rules engine. Because the destination must be empty, a king never counts
/// as attacking a square two files away.
pub(super) fn king_pattern(board: &Board, king: Piece, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    if df.abs() <= 1 && dr.abs() <= 1 {
        return true;
    }
    !king.has_moved() && dr == 0 && df.abs() == 2 && !board.is_occupied(to)
}
