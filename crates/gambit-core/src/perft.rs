//! Perft (performance test): leaf counts of the legal move tree, used to
//! cross-check the rules engine against published numbers.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::rules::legal_moves;

/// Count the leaf nodes `depth` plies below the given position.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves without playing them.
pub fn perft(board: &Board, to_move: Color, last_move: Option<&Move>, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, to_move, last_move);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&board.after(mv), to_move.flip(), Some(mv), depth - 1))
        .sum()
}

/// Per-move breakdown of [`perft`], sorted by coordinate notation.
pub fn divide(board: &Board, to_move: Color, last_move: Option<&Move>, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board, to_move, last_move)
        .iter()
        .map(|mv| {
            let count = perft(&board.after(mv), to_move.flip(), Some(mv), depth.saturating_sub(1));
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
