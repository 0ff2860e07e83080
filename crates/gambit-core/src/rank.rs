//! Board ranks (rows 1-8), rank 1 being White's home rank.

use std::fmt;

use crate::color::Color;

/// A rank (row) on the chess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks, bottom (White side) to top.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index, `None` when off the board.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// Step `delta` ranks up (positive) or down (negative).
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Rank> {
        let target = self as i8 + delta;
        if target < 0 || target > 7 {
            None
        } else {
            Rank::from_index(target as u8)
        }
    }

    /// The rank holding `color`'s pieces in the initial setup.
    #[inline]
    pub const fn back_rank(color: Color) -> Rank {
        match color {
            Color::White => Rank::Rank1,
            Color::Black => Rank::Rank8,
        }
    }

    /// The rank `color`'s pawns start on (and may double-step from).
    #[inline]
    pub const fn pawn_rank(color: Color) -> Rank {
        match color {
            Color::White => Rank::Rank2,
            Color::Black => Rank::Rank7,
        }
    }

    /// The rank on which `color`'s pawns promote: the opponent's back rank.
    #[inline]
    pub const fn promotion_rank(color: Color) -> Rank {
        Rank::back_rank(color.flip())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;
    use crate::color::Color;

    #[test]
    fn from_index_bounds() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_index(rank.index() as u8), Some(rank));
        }
        assert_eq!(Rank::from_index(8), None);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Rank::Rank2.offset(2), Some(Rank::Rank4));
        assert_eq!(Rank::Rank7.offset(-2), Some(Rank::Rank5));
        assert_eq!(Rank::Rank8.offset(1), None);
        assert_eq!(Rank::Rank1.offset(-1), None);
    }

    #[test]
    fn color_relative_ranks() {
        assert_eq!(Rank::back_rank(Color::White), Rank::Rank1);
        assert_eq!(Rank::back_rank(Color::Black), Rank::Rank8);
        assert_eq!(Rank::pawn_rank(Color::White), Rank::Rank2);
        assert_eq!(Rank::pawn_rank(Color::Black), Rank::Rank7);
        assert_eq!(Rank::promotion_rank(Color::White), Rank::Rank8);
        assert_eq!(Rank::promotion_rank(Color::Black), Rank::Rank1);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rank::Rank1), "1");
        assert_eq!(format!("{}", Rank::Rank8), "8");
    }
}
