//! Error types for board validation and move classification.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn stands.
        square: Square,
    },
}

/// Reasons a requested `(from, to, promotion)` triple cannot be turned into
/// a [`Move`](crate::chess_move::Move) at all.
///
/// These are input errors: they are raised before any chess rule is
/// consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// There is no piece on the origin square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty origin square.
        square: Square,
    },
    /// A pawn reaches the last rank but no promotion piece was given.
    #[error("pawn move {from}{to} requires a promotion piece")]
    PromotionRequired {
        /// Origin of the pawn.
        from: Square,
        /// Back-rank destination.
        to: Square,
    },
    /// The requested promotion piece is not a queen, rook, bishop or knight.
    #[error("cannot promote to {kind}")]
    InvalidPromotion {
        /// The rejected kind.
        kind: PieceKind,
    },
}
