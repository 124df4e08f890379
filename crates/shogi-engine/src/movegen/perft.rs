//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use super::{apply_move, legal_moves};
use crate::Position;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(position);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let new_pos = apply_move(position, *m);
        nodes += perft(&new_pos, depth - 1);
    }
    nodes
}

/// Perft with divide - node count below each root move, sorted by USI string.
/// Useful for locating which move subtree disagrees with a reference.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let moves = legal_moves(position);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let new_pos = apply_move(position, *m);
        let nodes = if depth > 1 {
            perft(&new_pos, depth - 1)
        } else {
            1
        };
        results.push((m.to_usi(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
