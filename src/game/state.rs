use crate::board::{Board, CastlingRights, Color, Piece, Square};
use crate::zobrist;

/// Everything needed to continue a game from a position.
///
/// Only the move applier produces new states from old ones; callers read
/// through the accessors. Two states are equal when all six fields match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl GameState {
    /// The standard initial position, White to move.
    #[must_use]
    pub fn starting_position() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Zobrist key of the position (placement, side, rights, en passant).
    #[must_use]
    pub fn position_key(&self) -> u64 {
        zobrist::position_key(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::starting_position()
    }
}
