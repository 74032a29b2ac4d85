//! Legality filter: drops pseudo-legal moves that leave the mover in check.

use super::apply::make_move_unchecked;
use super::movegen::{is_square_attacked, pseudo_legal_moves};
use super::GameState;
use crate::board::{Color, Move, MoveList, Square};

/// True if `color`'s king is attacked. A side without a king is never in check.
#[must_use]
pub fn in_check(state: &GameState, color: Color) -> bool {
    state
        .board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(&state.board, king, color.opponent()))
}

/// True if `square` is attacked by any piece of `by`.
#[must_use]
pub fn attacks_square(state: &GameState, square: Square, by: Color) -> bool {
    is_square_attacked(&state.board, square, by)
}

/// Check one pseudo-legal move against the king-safety rule.
pub(crate) fn is_legal(state: &GameState, mv: Move) -> bool {
    let mover = state.side_to_move;
    let enemy = mover.opponent();

    if let Some(side) = mv.castle_side() {
        let through = Square::from_index(mv.from.rank() * 8 + side.rook_to_file());
        if [mv.from, through, mv.to]
            .iter()
            .any(|&sq| is_square_attacked(&state.board, sq, enemy))
        {
            return false;
        }
    }

    let next = make_move_unchecked(state, mv);
    !in_check(&next, mover)
}

/// Legal moves for the piece on `square`, ascending by destination.
///
/// Empty for an empty square or a piece of the side not to move.
#[must_use]
pub fn legal_moves(state: &GameState, square: Square) -> MoveList {
    let mut moves = pseudo_legal_moves(state, square);
    moves.retain(|&mv| is_legal(state, mv));
    moves
}

/// Every legal move for the side to move.
#[must_use]
pub fn all_legal_moves(state: &GameState) -> MoveList {
    let mut all = MoveList::new();
    for (sq, _) in state.board.pieces(state.side_to_move) {
        all.extend(legal_moves(state, sq));
    }
    all.sort();
    all
}

/// True if `color` has at least one legal move.
///
/// When `color` is not the side to move, the question is asked of the same
/// placement with `color` to move and no en passant target.
#[must_use]
pub fn has_legal_moves(state: &GameState, color: Color) -> bool {
    if color == state.side_to_move {
        return any_legal_move(state);
    }
    let mut flipped = state.clone();
    flipped.side_to_move = color;
    flipped.en_passant_target = None;
    any_legal_move(&flipped)
}

fn any_legal_move(state: &GameState) -> bool {
    state
        .board
        .pieces(state.side_to_move)
        .any(|(sq, _)| !legal_moves(state, sq).is_empty())
}
