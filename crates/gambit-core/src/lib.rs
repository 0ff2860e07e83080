//! Core chess types: board representation, piece movement patterns, and the
//! rules engine deciding legality, check, checkmate and stalemate.

mod bitboard;
mod board;
mod chess_move;
mod color;
mod error;
mod file;
mod make_move;
mod piece;
mod piece_kind;
mod rank;
mod square;

pub mod movegen;
pub mod perft;
pub mod rules;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use chess_move::{CastleSide, Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, ClassifyError};
pub use file::File;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use rules::Outcome;
pub use square::{ParseSquareError, Square};
