use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::GameState;
use crate::board::{Color, MoveList, Square};

impl GameState {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> MoveList {
        KNIGHT_TARGETS[from.index()]
            .iter()
            .filter(|&&to| self.board.get(to).map_or(true, |p| p.color != color))
            .map(|&to| self.create_move(from, to))
            .collect()
    }
}
