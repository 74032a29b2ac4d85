use super::super::GameState;
use crate::board::{Color, Move, MoveList, Piece, PieceKind, Square, PROMOTION_KINDS};

impl GameState {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(0, dir) {
            if self.board.is_empty(forward) {
                if forward.rank() == promotion_rank {
                    push_promotions(&mut moves, from, forward, false);
                } else {
                    moves.push(Move::quiet(from, forward));
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(double) = forward.offset(0, dir) {
                            if self.board.is_empty(double) {
                                moves.push(Move::double_pawn_push(from, double));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(df, dir) else {
                continue;
            };
            match self.board.get(target) {
                Some(piece) if piece.color != color => {
                    if target.rank() == promotion_rank {
                        push_promotions(&mut moves, from, target, true);
                    } else {
                        moves.push(Move::capture(from, target));
                    }
                }
                Some(_) => {}
                None => {
                    if Some(target) == self.en_passant_target
                        && self.board.get(target.with_rank(from.rank()))
                            == Some(Piece::new(PieceKind::Pawn, color.opponent()))
                    {
                        moves.push(Move::en_passant(from, target));
                    }
                }
            }
        }

        moves
    }
}

fn push_promotions(moves: &mut MoveList, from: Square, to: Square, capture: bool) {
    for kind in PROMOTION_KINDS {
        moves.push(Move::promotion(from, to, kind, capture));
    }
}
