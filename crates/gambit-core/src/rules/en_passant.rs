//! En passant validation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;

/// Decide whether `mv` is a valid en passant capture given the move played
/// immediately before it. King safety is checked separately by the caller.
///
/// The previous move must be an enemy pawn advancing two ranks and landing
/// right beside the capturing pawn; the capture lands on the square that pawn
/// skipped over.
pub(super) fn is_valid_en_passant(board: &Board, mv: &Move, last_move: Option<&Move>) -> bool {
    let Some(last) = last_move else {
        return false;
    };
    let pawn = mv.piece();
    let passed = last.piece();

    if pawn.kind() != PieceKind::Pawn || passed.kind() != PieceKind::Pawn {
        return false;
    }
    if !passed.is_enemy_of(pawn) {
        return false;
    }

    let (_, advance) = last.source().delta(last.dest());
    if advance.abs() != 2 {
        return false;
    }

    let (side_step, same_rank) = mv.source().delta(last.dest());
    if same_rank != 0 || side_step.abs() != 1 {
        return false;
    }

    if last.dest().offset(0, pawn.color().forward()) != Some(mv.dest()) {
        return false;
    }

    // The move record must name the pawn that actually stands there.
    let beside = board.get(last.dest());
    beside.is_some_and(|p| p.with_moved(false) == passed.with_moved(false))
        && mv.captured() == beside
}
