//! The rules engine: full legality on top of the piece catalog.
//!
//! Every decision is a pure function of a board snapshot and the move played
//! just before (needed for en passant). Hypothetical moves are tried on a
//! copy of the board with [`Board::apply`], the same routine that executes
//! committed moves.

mod castling;
mod check;
mod en_passant;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::error::ClassifyError;
use crate::movegen::pattern_allows;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

pub use self::check::{is_attacked, king_in_check};

/// Result of looking at the side to move's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move has at least one legal move.
    Ongoing,
    /// The side to move is in check and has no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

/// Turn a requested `(from, to, promotion)` into a [`Move`] record.
///
/// The category comes from geometry and occupancy alone: an unmoved-or-not
/// king sliding two files is a castle, a pawn stepping diagonally forward
/// into an empty square is an en passant attempt, a pawn reaching its last
/// rank is a promotion. Nothing here says whether the move is legal.
///
/// `promotion` is ignored unless the move is a promotion, in which case it
/// is required and must name a queen, rook, bishop or knight.
pub fn classify(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, ClassifyError> {
    let piece = board.get(from).ok_or(ClassifyError::EmptySquare { square: from })?;
    let (df, dr) = from.delta(to);

    match piece.kind() {
        PieceKind::King if df.abs() == 2 && dr == 0 => Ok(Move::new_castle(from, to, piece)),
        PieceKind::Pawn
            if df.abs() == 1 && dr == piece.color().forward() && !board.is_occupied(to) =>
        {
            let beside = board.get(Square::new(from.rank(), to.file()));
            Ok(Move::new_en_passant(from, to, piece, beside))
        }
        PieceKind::Pawn if to.rank() == Rank::promotion_rank(piece.color()) => {
            let kind = promotion.ok_or(ClassifyError::PromotionRequired { from, to })?;
            let promo =
                PromotionPiece::from_piece_kind(kind).ok_or(ClassifyError::InvalidPromotion { kind })?;
            Ok(Move::new_promotion(from, to, piece, board.get(to), promo))
        }
        _ => Ok(Move::new(from, to, piece, board.get(to))),
    }
}

/// Decide whether `mv` is legal on `board`, given the move played just
/// before it.
///
/// Checks, in order: basic shape (distinct squares, mover present, no
/// friendly capture); castling, decided entirely by the castling rules;
/// en passant, accepted if valid and king-safe; otherwise the piece
/// pattern, followed by a simulation proving the mover's king is not left
/// in check. The move's flags must agree with its geometry.
pub fn is_legal(board: &Board, mv: &Move, last_move: Option<&Move>) -> bool {
    let (from, to) = (mv.source(), mv.dest());
    let piece = mv.piece();
    let color = piece.color();

    if from == to || board.get(from) != Some(piece) || board.color_on(to) == Some(color) {
        return false;
    }

    let (df, dr) = from.delta(to);

    if piece.kind() == PieceKind::King && df.abs() == 2 && dr == 0 {
        return mv.is_castle() && castling::is_valid_castle(board, mv);
    }
    if mv.is_castle() {
        return false;
    }

    if piece.kind() == PieceKind::Pawn
        && df.abs() == 1
        && dr == color.forward()
        && !board.is_occupied(to)
        && mv.is_en_passant()
        && en_passant::is_valid_en_passant(board, mv, last_move)
    {
        return !leaves_king_in_check(board, mv);
    }
    if mv.is_en_passant() {
        return false;
    }

    if !pattern_allows(board, piece, from, to) {
        return false;
    }

    let reaches_last_rank =
        piece.kind() == PieceKind::Pawn && to.rank() == Rank::promotion_rank(color);
    if mv.is_promotion() != reaches_last_rank || mv.captured() != board.get(to) {
        return false;
    }

    !leaves_king_in_check(board, mv)
}

/// Play `mv` on a copy of `board` and report whether the mover's king is
/// attacked afterwards.
pub fn leaves_king_in_check(board: &Board, mv: &Move) -> bool {
    king_in_check(&board.after(mv), mv.piece().color())
}

/// Candidate move records for one piece towards `to`: one per promotion
/// piece when the move reaches the last rank, otherwise just one.
fn candidates(board: &Board, from: Square, to: Square) -> impl Iterator<Item = Move> {
    let promotes = board.get(from).is_some_and(|p| {
        p.kind() == PieceKind::Pawn && to.rank() == Rank::promotion_rank(p.color())
    });
    let choices: &[Option<PieceKind>] = if promotes {
        &[
            Some(PieceKind::Queen),
            Some(PieceKind::Rook),
            Some(PieceKind::Bishop),
            Some(PieceKind::Knight),
        ]
    } else {
        &[None]
    };
    let board = *board;
    choices
        .iter()
        .filter_map(move |&choice| classify(&board, from, to, choice).ok())
}

/// All legal moves for `color`, promotions expanded into their four choices.
///
/// Found by trying every origin holding a `color` piece against every square.
pub fn legal_moves(board: &Board, color: Color, last_move: Option<&Move>) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, _)| Square::all().flat_map(move |to| candidates(board, from, to)))
        .filter(|mv| is_legal(board, mv, last_move))
        .collect()
}

/// Return `true` if `color` has at least one legal move.
pub fn has_legal_move(board: &Board, color: Color, last_move: Option<&Move>) -> bool {
    board.pieces(color).any(|(from, _)| {
        Square::all()
            .flat_map(|to| candidates(board, from, to))
            .any(|mv| is_legal(board, &mv, last_move))
    })
}

/// The set of squares the piece on `from` may legally move to.
pub fn legal_destinations(board: &Board, from: Square, last_move: Option<&Move>) -> Bitboard {
    Square::all()
        .filter(|&to| {
            candidates(board, from, to).any(|mv| is_legal(board, &mv, last_move))
        })
        .collect()
}

/// Checkmate, stalemate or neither for `to_move`.
pub fn outcome(board: &Board, to_move: Color, last_move: Option<&Move>) -> Outcome {
    if has_legal_move(board, to_move, last_move) {
        Outcome::Ongoing
    } else if king_in_check(board, to_move) {
        Outcome::Checkmate { winner: to_move.flip() }
    } else {
        Outcome::Stalemate
    }
}
