//! Square sets packed into a 64-bit integer, one bit per square (LERF).

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::square::Square;

/// A set of squares. Used for occupancy snapshots and move hints.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No squares.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 64 squares.
    pub const FULL: Bitboard = Bitboard(!0);

    /// Create a bitboard from a raw `u64`.
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// Return the underlying `u64`.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Return `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `sq` is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Return a new bitboard with `sq` added.
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1u64 << sq.index()))
    }

    /// Return a new bitboard with `sq` removed.
    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1u64 << sq.index()))
    }

    /// Return the lowest square in the set, or `None` if empty.
    #[inline]
    pub fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as u8)
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Iterates squares from a1 upwards, consuming the set.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bitboard {}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::square::Square;

    #[test]
    fn with_contains_without() {
        let bb = Bitboard::EMPTY.with(Square::E4).with(Square::A1);
        assert!(bb.contains(Square::E4));
        assert!(bb.contains(Square::A1));
        assert!(!bb.contains(Square::H8));
        assert_eq!(bb.count(), 2);
        assert_eq!(bb.without(Square::E4).count(), 1);
    }

    #[test]
    fn iterates_in_index_order() {
        let bb: Bitboard = [Square::H8, Square::C3, Square::A1].into_iter().collect();
        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![Square::A1, Square::C3, Square::H8]);
        assert_eq!(bb.len(), 3);
    }

    #[test]
    fn set_operators() {
        let a = Bitboard::EMPTY.with(Square::D4);
        let b = Bitboard::EMPTY.with(Square::D5);
        assert_eq!((a | b).count(), 2);
        assert!((a & b).is_empty());
        assert_eq!((!Bitboard::EMPTY), Bitboard::FULL);
    }

    #[test]
    fn debug_lists_squares() {
        let bb = Bitboard::EMPTY.with(Square::E4);
        assert_eq!(format!("{bb:?}"), "{Square(e4)}");
    }
}
