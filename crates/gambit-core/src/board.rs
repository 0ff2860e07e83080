//! The chess board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement, indexed by [`Square::index`].
///
/// The grid is the only record of where a piece stands. `Board` is `Copy`,
/// so simulating a hypothetical move is a 64-byte copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board { cells: [None; Square::COUNT] }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = Rank::back_rank(color);
            let pawns = Rank::pawn_rank(color);
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK_LAYOUT) {
                board.place(Square::new(back, file), Piece::new(kind, color));
                board.place(Square::new(pawns, file), Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Build a board from an explicit list of placements.
    pub fn from_pieces<I>(pieces: I) -> Board
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        for (sq, piece) in pieces {
            board.place(sq, piece);
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Bounds-checked lookup by raw coordinates. Off-board reads are empty.
    #[inline]
    pub fn get_at(&self, file: i8, rank: i8) -> Option<Piece> {
        Square::from_coords(file, rank).and_then(|sq| self.get(sq))
    }

    /// Overwrite the contents of `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Put `piece` on `sq`, replacing whatever stood there.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Empty `sq`.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.set(sq, None);
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.get(sq).is_some()
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    /// Return the kind of the piece on `sq`, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<PieceKind> {
        self.get(sq).map(Piece::kind)
    }

    /// Iterate over every occupied square and its piece, a1 first.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the pieces of one side.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants().filter(move |(_, piece)| piece.color() == color)
    }

    /// The set of occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.occupants().map(|(sq, _)| sq).collect()
    }

    /// Return the square of `color`'s king, or `None` if it is not on the
    /// board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.occupants()
            .find(|(_, piece)| piece.with_moved(false) == king)
            .map(|(sq, _)| sq)
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count() as u32;
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        if let Some((square, _)) = self.occupants().find(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && matches!(sq.rank(), Rank::Rank1 | Rank::Rank8)
        }) {
            return Err(BoardError::PawnOnBackRank { square });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.occupants()).finish()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = self.0.get(Square::new(rank, file)).map_or('.', Piece::symbol);
                if file == File::FileH {
                    write!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
