use super::super::attack_tables::{
    BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS,
};
use super::super::GameState;
use crate::board::{Board, CastleSide, Color, Move, MoveList, Piece, PieceKind, Square};

impl GameState {
    /// King steps plus castle candidates.
    ///
    /// Castling is offered when the right is held, king and rook stand on
    /// their home squares and every square between them is empty. Whether
    /// the king crosses attacked squares is left to the legality filter.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves: MoveList = KING_TARGETS[from.index()]
            .iter()
            .filter(|&&to| self.board.get(to).map_or(true, |p| p.color != color))
            .map(|&to| self.create_move(from, to))
            .collect();

        let back_rank = color.back_rank();
        if from != Square::from_index(back_rank * 8 + 4) {
            return moves;
        }

        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let rook_sq = Square::from_index(back_rank * 8 + side.rook_file());
            if self.board.get(rook_sq) != Some(Piece::new(PieceKind::Rook, color)) {
                continue;
            }
            let (lo, hi) = match side {
                CastleSide::Kingside => (5, 6),
                CastleSide::Queenside => (1, 3),
            };
            let path_clear =
                (lo..=hi).all(|file| self.board.is_empty(Square::from_index(back_rank * 8 + file)));
            if path_clear {
                let to = Square::from_index(back_rank * 8 + side.king_to_file());
                moves.push(Move::castle(from, to, side));
            }
        }

        moves
    }
}

/// True if any piece of `attacker` attacks `target`.
///
/// Works backwards from the target: a knight `attacker` attacks it if a
/// knight of that color stands a knight's jump away, and so on per kind.
/// Pawns attack diagonally only; castling never attacks.
pub(crate) fn is_square_attacked(board: &Board, target: Square, attacker: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| board.get(sq) == Some(Piece::new(kind, attacker));

    // A pawn of `attacker` attacks `target` from one rank behind it.
    let pawn_dir = -attacker.pawn_direction();
    for df in [-1, 1] {
        if let Some(sq) = target.offset(df, pawn_dir) {
            if holds(sq, PieceKind::Pawn) {
                return true;
            }
        }
    }

    if KNIGHT_TARGETS[target.index()]
        .iter()
        .any(|&sq| holds(sq, PieceKind::Knight))
    {
        return true;
    }

    if KING_TARGETS[target.index()]
        .iter()
        .any(|&sq| holds(sq, PieceKind::King))
    {
        return true;
    }

    let ray_hits = |directions: &[(i8, i8)], kinds: [PieceKind; 2]| {
        directions.iter().any(|&(df, dr)| {
            let mut current = target;
            while let Some(sq) = current.offset(df, dr) {
                if let Some(piece) = board.get(sq) {
                    return piece.color == attacker && kinds.contains(&piece.kind);
                }
                current = sq;
            }
            false
        })
    };

    ray_hits(&ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen])
        || ray_hits(&BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen])
}
