//! Errors returned when a requested move is not played.

use gambit_core::{ClassifyError, Color, Move, Square};

/// Why [`Game::attempt_move`](crate::Game::attempt_move) rejected a request.
///
/// Every variant leaves the game exactly as it was. [`MoveError::Illegal`]
/// is the only rules violation; the rest are input errors caught before any
/// chess rule is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// There is no piece on the start square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty start square.
        square: Square,
    },

    /// The piece on the start square belongs to the side not on move.
    #[error("piece on {square} cannot move, it is {turn}'s turn")]
    NotYourTurn {
        /// The start square.
        square: Square,
        /// The side to move.
        turn: Color,
    },

    /// The request could not be turned into a move record, such as a
    /// back-rank pawn move without a promotion choice.
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// The move breaks the rules of chess.
    #[error("illegal move {mv}")]
    Illegal {
        /// The rejected move.
        mv: Move,
    },

    /// The game already ended in checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
}

impl MoveError {
    /// Return `true` for malformed requests, `false` for rules violations.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, MoveError::Illegal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::Piece;

    #[test]
    fn taxonomy() {
        let illegal = MoveError::Illegal {
            mv: Move::new(Square::E2, Square::E5, Piece::WHITE_PAWN, None),
        };
        assert!(!illegal.is_input_error());
        assert!(MoveError::GameOver.is_input_error());
        assert!(MoveError::EmptySquare { square: Square::E4 }.is_input_error());
        let promo: MoveError = ClassifyError::PromotionRequired { from: Square::A7, to: Square::A8 }.into();
        assert!(promo.is_input_error());
    }

    #[test]
    fn display() {
        let err = MoveError::NotYourTurn { square: Square::E7, turn: Color::White };
        assert_eq!(err.to_string(), "piece on e7 cannot move, it is white's turn");
        let err = MoveError::Illegal {
            mv: Move::new(Square::E2, Square::E5, Piece::WHITE_PAWN, None),
        };
        assert_eq!(err.to_string(), "illegal move e2e5");
        let err: MoveError = ClassifyError::PromotionRequired { from: Square::A7, to: Square::A8 }.into();
        assert_eq!(err.to_string(), "pawn move a7a8 requires a promotion piece");
    }
}
