//! Perft (performance test) for validating the rules.
//!
//! Perft counts the leaf nodes of the legal move tree to a given depth.
//! The counts for well-known positions are published, so any disagreement
//! points at a legality or move application bug.

use crate::apply::apply_move;
use crate::legality::legal_moves;
use crate::Position;

/// Counts the leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .filter_map(|mv| apply_move(position, mv).ok())
        .map(|next| perft(&next, depth - 1))
        .sum()
}

/// Perft split by root move, sorted by UCI string.
/// Useful for narrowing a wrong count down to the move that causes it.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(position)
        .into_iter()
        .filter_map(|mv| {
            let next = apply_move(position, mv).ok()?;
            let nodes = if depth > 1 { perft(&next, depth - 1) } else { 1 };
            Some((mv.to_uci(), nodes))
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
