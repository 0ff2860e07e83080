//! The piece catalog: per-kind movement patterns.
//!
//! A pattern answers "may this piece travel from `from` to `to` on this
//! board?" using geometry, obstruction and the color of the destination
//! occupant only. It never asks whether the move exposes a king; that is the
//! rules engine's job. En passant and the full castling conditions depend on
//! history and are not expressible here.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::pawns::pawn_attacks;

/// Return `true` if `piece`, standing on `from`, may move to `to` by its
/// movement pattern on `board`.
pub fn pattern_allows(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to || !is_free_for(board, piece, to) {
        return false;
    }
    match piece.kind() {
        PieceKind::Pawn => pawns::pawn_pattern(board, piece, from, to),
        PieceKind::Knight => knights::knight_pattern(from, to),
        PieceKind::Bishop => sliders::bishop_pattern(board, from, to),
        PieceKind::Rook => sliders::rook_pattern(board, from, to),
        PieceKind::Queen => sliders::queen_pattern(board, from, to),
        PieceKind::King => king::king_pattern(board, piece, from, to),
    }
}

/// `to` is empty or holds an enemy of `piece`.
#[inline]
fn is_free_for(board: &Board, piece: Piece, to: Square) -> bool {
    board.get(to).is_none_or(|occupant| occupant.is_enemy_of(piece))
}
