//! Pawn pattern and pawn attack geometry.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// Single push into an empty square, double push from the home rank for an
/// unmoved pawn over two empty squares, or a diagonal step onto an enemy.
///
/// En passant is not part of the pattern: it depends on the previous move.
pub(super) fn pawn_pattern(board: &Board, pawn: Piece, from: Square, to: Square) -> bool {
    let color = pawn.color();
    let forward = color.forward();
    let (df, dr) = from.delta(to);

    match (df, dr) {
        (0, dr) if dr == forward => !board.is_occupied(to),
        (0, dr) if dr == 2 * forward => {
            !pawn.has_moved()
                && from.rank() == Rank::pawn_rank(color)
                && !board.is_occupied(to)
                && from.offset(0, forward).is_some_and(|mid| !board.is_occupied(mid))
        }
        (-1 | 1, dr) if dr == forward => board.get(to).is_some_and(|t| t.is_enemy_of(pawn)),
        _ => false,
    }
}

/// Return `true` if a `color` pawn on `from` attacks `target`.
///
/// Unlike the move pattern this ignores the target's occupant: a pawn
/// guards its forward diagonals whether or not anything stands there.
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (df, dr) = from.delta(target);
    df.abs() == 1 && dr == color.forward()
}
