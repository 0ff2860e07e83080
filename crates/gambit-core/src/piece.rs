//! Colored chess piece with its has-moved flag, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

const KIND_MASK: u8 = 0x07;
const COLOR_BIT: u8 = 0x08;
const MOVED_BIT: u8 = 0x10;

/// A colored chess piece.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
/// - bit 4: has moved (only ever set for pawns, rooks and kings)
///
/// A piece does not know its square; the [`Board`](crate::Board) cell holding
/// it is the only record of where it stands.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create an unmoved piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & KIND_MASK {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & COLOR_BIT == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Whether this piece has made a move. Always `false` for knights,
    /// bishops and queens.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.0 & MOVED_BIT != 0
    }

    /// Return this piece with its has-moved flag set, for the kinds that
    /// track it.
    #[inline]
    pub const fn moved(self) -> Piece {
        self.with_moved(true)
    }

    /// Return this piece with its has-moved flag forced to `moved`.
    #[inline]
    pub const fn with_moved(self, moved: bool) -> Piece {
        if moved && self.kind().tracks_moved() {
            Piece(self.0 | MOVED_BIT)
        } else {
            Piece(self.0 & !MOVED_BIT)
        }
    }

    /// Return `true` if `self` and `other` belong to different sides.
    #[inline]
    pub const fn is_enemy_of(self, other: Piece) -> bool {
        (self.0 ^ other.0) & COLOR_BIT != 0
    }

    /// Board diagram character: upper case for White, lower case for Black.
    #[inline]
    pub fn symbol(self) -> char {
        let letter = self.kind().letter();
        match self.color() {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind().letter())?;
        if self.has_moved() {
            write!(f, "*")?;
        }
        Ok(())
    }
}
