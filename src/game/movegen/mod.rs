//! Pseudo-legal move generation.
//!
//! Moves here obey each piece's movement pattern and the board's
//! occupancy but may leave the mover's own king in check. The legality
//! filter removes those.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::GameState;
use crate::board::{Move, MoveList, Piece, PieceKind, Square};

pub(crate) use kings::is_square_attacked;

/// Pseudo-legal moves for the piece on `from`.
///
/// Empty if the square is empty or holds a piece of the side not to move.
/// Sorted ascending by destination square.
#[must_use]
pub fn pseudo_legal_moves(state: &GameState, from: Square) -> MoveList {
    let Some(piece) = state.board.get(from) else {
        return MoveList::new();
    };
    if piece.color != state.side_to_move {
        return MoveList::new();
    }
    let mut moves = generate_piece_moves(state, from, piece);
    moves.sort();
    moves
}

fn generate_piece_moves(state: &GameState, from: Square, piece: Piece) -> MoveList {
    match piece.kind {
        PieceKind::Pawn => state.generate_pawn_moves(from, piece.color),
        PieceKind::Knight => state.generate_knight_moves(from, piece.color),
        PieceKind::Bishop => state.generate_sliding_moves(from, piece.color, &BISHOP_DIRECTIONS),
        PieceKind::Rook => state.generate_sliding_moves(from, piece.color, &ROOK_DIRECTIONS),
        PieceKind::Queen => state.generate_sliding_moves(from, piece.color, &QUEEN_DIRECTIONS),
        PieceKind::King => state.generate_king_moves(from, piece.color),
    }
}

impl GameState {
    /// A normal move or a capture, depending on what stands on `to`.
    pub(crate) fn create_move(&self, from: Square, to: Square) -> Move {
        if self.board.is_empty(to) {
            Move::quiet(from, to)
        } else {
            Move::capture(from, to)
        }
    }
}
