//! The move record: one proposed or executed transition.

use std::fmt;

use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Special handling a move needs beyond "lift and drop".
///
/// En passant and castling are mutually exclusive, so they share one enum.
/// Promotion combines with [`MoveKind::Normal`] and is carried separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    Normal = 0,
    EnPassant = 1,
    Castling = 2,
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Narrow a [`PieceKind`]; pawns and kings are not promotion targets.
    pub const fn from_piece_kind(kind: PieceKind) -> Option<PromotionPiece> {
        match kind {
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// Infer the side from the king's destination file (g or c).
    pub const fn from_king_dest(file: File) -> Option<CastleSide> {
        match file {
            File::FileG => Some(CastleSide::King),
            File::FileC => Some(CastleSide::Queen),
            _ => None,
        }
    }

    /// File the rook starts on.
    pub const fn rook_origin(self) -> File {
        match self {
            CastleSide::King => File::FileH,
            CastleSide::Queen => File::FileA,
        }
    }

    /// File the rook lands on.
    pub const fn rook_dest(self) -> File {
        match self {
            CastleSide::King => File::FileF,
            CastleSide::Queen => File::FileD,
        }
    }
}

/// An immutable move record.
///
/// `piece` is the mover exactly as it stood before the move, has-moved flag
/// included, and `captured` is the piece removed by the move. Together they
/// are enough to undo the move without consulting anything else.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a normal (quiet or capture) move.
    pub const fn new(source: Square, dest: Square, piece: Piece, captured: Option<Piece>) -> Move {
        Move {
            source,
            dest,
            piece,
            captured,
            kind: MoveKind::Normal,
            promotion: None,
        }
    }

    /// Create a pawn move to the last rank.
    pub const fn new_promotion(
        source: Square,
        dest: Square,
        pawn: Piece,
        captured: Option<Piece>,
        promo: PromotionPiece,
    ) -> Move {
        Move {
            source,
            dest,
            piece: pawn,
            captured,
            kind: MoveKind::Normal,
            promotion: Some(promo),
        }
    }

    /// Create an en passant capture. `captured` is the pawn beside `source`.
    pub const fn new_en_passant(
        source: Square,
        dest: Square,
        pawn: Piece,
        captured: Option<Piece>,
    ) -> Move {
        Move {
            source,
            dest,
            piece: pawn,
            captured,
            kind: MoveKind::EnPassant,
            promotion: None,
        }
    }

    /// Create a castling move from the king's source and destination.
    pub const fn new_castle(king_src: Square, king_dst: Square, king: Piece) -> Move {
        Move {
            source: king_src,
            dest: king_dst,
            piece: king,
            captured: None,
            kind: MoveKind::Castling,
            promotion: None,
        }
    }

    /// The origin square.
    #[inline]
    pub const fn source(&self) -> Square {
        self.source
    }

    /// The destination square.
    #[inline]
    pub const fn dest(&self) -> Square {
        self.dest
    }

    /// The moving piece as it was before the move.
    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// The captured piece, if any.
    #[inline]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// The special-move category.
    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The promotion target, if this is a promotion.
    #[inline]
    pub const fn promotion(&self) -> Option<PromotionPiece> {
        self.promotion
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castling)
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Where the captured piece stood: the destination, except for en
    /// passant where it is the square beside the origin.
    pub const fn captured_square(&self) -> Option<Square> {
        if self.captured.is_none() {
            return None;
        }
        match self.kind {
            MoveKind::EnPassant => Some(Square::new(self.source.rank(), self.dest.file())),
            _ => Some(self.dest),
        }
    }

    /// The castling side, for castling moves.
    pub const fn castle_side(&self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castling => CastleSide::from_king_dest(self.dest.file()),
            _ => None,
        }
    }

    /// The rook's (origin, destination) for castling moves.
    pub const fn rook_squares(&self) -> Option<(Square, Square)> {
        match self.castle_side() {
            Some(side) => {
                let rank = self.source.rank();
                Some((Square::new(rank, side.rook_origin()), Square::new(rank, side.rook_dest())))
            }
            None => None,
        }
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_piece_kind().letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?} kind={:?}", self, self.piece, self.kind)?;
        if let Some(captured) = self.captured {
            write!(f, " captures={captured:?}")?;
        }
        write!(f, ")")
    }
}
