//! Board files (columns a-h).

use std::fmt;

/// A file (column) on the chess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Total number of files.
    pub const COUNT: usize = 8;

    /// All files, queen side to king side.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index, `None` when off the board.
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Step `delta` files towards h (positive) or a (negative).
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<File> {
        let target = self as i8 + delta;
        if target < 0 || target > 7 {
            None
        } else {
            File::from_index(target as u8)
        }
    }

    /// Signed distance from `self` to `other` (positive towards h).
    #[inline]
    pub const fn delta(self, other: File) -> i8 {
        other as i8 - self as i8
    }

    /// Lower-case letter used in algebraic notation.
    #[inline]
    pub const fn letter(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
