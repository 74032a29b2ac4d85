//! Zobrist hashing for chess positions.
//!
//! Position keys identify repeated positions for the threefold repetition
//! rule. Keys cover placement, side to move, castling rights and the
//! en passant file.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastleSide, Color, Square};
use crate::game::GameState;

pub(crate) struct ZobristKeys {
    // piece_keys[piece_kind][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][side]: 0=Kingside, 1=Queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file_index]
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
fn side_index(side: CastleSide) -> usize {
    match side {
        CastleSide::Kingside => 0,
        CastleSide::Queenside => 1,
    }
}

/// Compute the key of a position from scratch.
pub(crate) fn position_key(state: &GameState) -> u64 {
    let mut hash: u64 = 0;

    for (sq, piece) in state.board().occupied() {
        hash ^= ZOBRIST.piece_keys[piece.kind.index()][piece.color.index()][sq.index()];
    }

    if state.side_to_move() == Color::Black {
        hash ^= ZOBRIST.black_to_move_key;
    }

    let rights = state.castling_rights();
    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            if rights.has(color, side) {
                hash ^= ZOBRIST.castling_keys[color.index()][side_index(side)];
            }
        }
    }

    if let Some(ep) = state.en_passant_target() {
        hash ^= en_passant_key(ep);
    }

    hash
}

#[inline]
fn en_passant_key(sq: Square) -> u64 {
    ZOBRIST.en_passant_keys[sq.file()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::import_fen;

    #[test]
    fn test_key_depends_on_side_to_move() {
        let white = import_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let black = import_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_ne!(position_key(&white), position_key(&black));
    }

    #[test]
    fn test_key_ignores_counters() {
        let a = import_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let b = import_fen("4k3/8/8/8/8/8/8/4K3 w - - 37 60").unwrap();
        assert_eq!(position_key(&a), position_key(&b));
    }

    #[test]
    fn test_key_depends_on_castling() {
        let a = import_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let b = import_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1").unwrap();
        assert_ne!(position_key(&a), position_key(&b));
    }
}
