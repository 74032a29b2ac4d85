use super::apply::make_move_unchecked;
use super::legality::all_legal_moves;
use super::GameState;
use crate::board::Move;

impl GameState {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = all_legal_moves(self);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| make_move_unchecked(self, mv).perft(depth - 1))
            .sum()
    }

    /// Per-move node counts at `depth`, in move order.
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Move, u64)> {
        all_legal_moves(self)
            .iter()
            .map(|&mv| (mv, make_move_unchecked(self, mv).perft(depth.saturating_sub(1))))
            .collect()
    }
}
