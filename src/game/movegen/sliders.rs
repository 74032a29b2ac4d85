use super::super::GameState;
use crate::board::{Color, MoveList, Square};

impl GameState {
    /// Cast a ray per direction, stopping at the first occupied square
    /// (included when it holds an enemy piece).
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(to) = current.offset(df, dr) {
                match self.board.get(to) {
                    None => moves.push(self.create_move(from, to)),
                    Some(piece) => {
                        if piece.color != color {
                            moves.push(self.create_move(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}
