//! Algebraic notation for history display.

use std::fmt::Write;

use gambit_core::rules::{has_legal_move, king_in_check};
use gambit_core::{Board, CastleSide, Move, PieceKind};

/// Render `mv`, played from the position `before`, in algebraic notation.
///
/// The check or mate suffix describes the position right after the move.
/// En passant captures carry a trailing ` e.p.`.
pub fn san(before: &Board, mv: &Move) -> String {
    let mut text = String::new();

    match mv.castle_side() {
        Some(CastleSide::King) => text.push_str("O-O"),
        Some(CastleSide::Queen) => text.push_str("O-O-O"),
        None => {
            let is_pawn = mv.piece().kind() == PieceKind::Pawn;
            if !is_pawn {
                text.push(mv.piece().kind().letter());
            }
            if mv.is_capture() {
                if is_pawn {
                    text.push(mv.source().file().letter());
                }
                text.push('x');
            }
            let _ = write!(text, "{}", mv.dest());
            if mv.is_en_passant() {
                text.push_str(" e.p.");
            }
            if let Some(promo) = mv.promotion() {
                text.push('=');
                text.push(promo.to_piece_kind().letter());
            }
        }
    }

    let after = before.after(mv);
    let defender = mv.piece().color().flip();
    if king_in_check(&after, defender) {
        text.push(if has_legal_move(&after, defender, Some(mv)) { '+' } else { '#' });
    }

    text
}
