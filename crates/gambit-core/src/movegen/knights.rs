//! Knight pattern.

use crate::square::Square;

/// The eight (file, rank) jumps.
pub(super) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// An L-shaped jump. Knights ignore anything in between.
pub(super) fn knight_pattern(from: Square, to: Square) -> bool {
    KNIGHT_JUMPS.contains(&from.delta(to))
}
