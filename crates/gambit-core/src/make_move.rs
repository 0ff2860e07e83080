//! Move execution and its exact inverse.
//!
//! [`Board::apply`] is the single implementation of a move's board effects.
//! The game applies committed moves with it and the rules engine applies
//! hypothetical moves to a copy with it, so the two cannot drift apart.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

impl Board {
    /// Apply `mv` in place. The move is assumed legal.
    ///
    /// Order: lift the mover, remove the captured piece from its own square
    /// (which differs from the destination for en passant), relocate the
    /// castling rook, then drop the mover (or its promoted replacement) on
    /// the destination with its has-moved flag set.
    pub fn apply(&mut self, mv: &Move) {
        self.clear(mv.source());

        if let Some(captured_sq) = mv.captured_square() {
            self.clear(captured_sq);
        }

        if let Some((rook_src, rook_dst)) = mv.rook_squares()
            && let Some(rook) = self.take(rook_src)
        {
            self.place(rook_dst, rook.moved());
        }

        let landed = match mv.promotion() {
            Some(promo) => Piece::new(promo.to_piece_kind(), mv.piece().color()),
            None => mv.piece().moved(),
        };
        self.place(mv.dest(), landed);
    }

    /// Undo `mv`, which must be the most recent move applied to this board.
    ///
    /// The mover goes back exactly as recorded in the move (restoring its
    /// previous has-moved flag), a captured piece returns to the square it
    /// was taken on, and a castling rook returns to its corner unmoved.
    pub fn revert(&mut self, mv: &Move) {
        self.clear(mv.dest());

        if let Some((rook_src, rook_dst)) = mv.rook_squares()
            && let Some(rook) = self.take(rook_dst)
        {
            self.place(rook_src, rook.with_moved(false));
        }

        self.place(mv.source(), mv.piece());

        if let (Some(captured), Some(captured_sq)) = (mv.captured(), mv.captured_square()) {
            self.place(captured_sq, captured);
        }
    }

    /// Copy-make: return the board after `mv`, leaving `self` untouched.
    pub fn after(&self, mv: &Move) -> Board {
        let mut b = *self;
        b.apply(mv);
        b
    }
}
