//! Game status: check, mate, stalemate and draws.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::legality::{has_legal_moves, in_check};
use super::GameState;
use crate::board::{Color, PieceKind};

/// Halfmove clock value at which the fifty-move rule ends the game.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Occurrences of one position that end the game by repetition.
pub const REPETITION_LIMIT: u32 = 3;

/// Where a game stands after the last move.
///
/// `Ongoing` and `Check` continue; every other status is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawFiftyMove,
    DrawRepetition,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::DrawFiftyMove | GameStatus::DrawRepetition
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawFiftyMove => "draw by fifty-move rule",
            GameStatus::DrawRepetition => "draw by threefold repetition",
        };
        f.write_str(text)
    }
}

/// Status of a bare position. Without history, repetition is never reported.
#[must_use]
pub fn status(state: &GameState) -> GameStatus {
    status_with_repetitions(state, 1)
}

/// Status given how many times the current position has occurred.
///
/// Mate and stalemate take precedence over the draw rules.
pub(crate) fn status_with_repetitions(state: &GameState, repetitions: u32) -> GameStatus {
    let side = state.side_to_move;
    let checked = in_check(state, side);
    if !has_legal_moves(state, side) {
        return if checked {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }
    if state.halfmove_clock >= FIFTY_MOVE_LIMIT {
        return GameStatus::DrawFiftyMove;
    }
    if repetitions >= REPETITION_LIMIT {
        return GameStatus::DrawRepetition;
    }
    if checked {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}

/// Neither side has mating material: bare kings, a single minor piece,
/// or bishops that all stand on one square color.
#[must_use]
pub fn is_insufficient_material(state: &GameState) -> bool {
    let mut knights = 0;
    let mut bishops_light = 0;
    let mut bishops_dark = 0;

    for (sq, piece) in state.board.occupied() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => knights += 1,
            PieceKind::Bishop if sq.is_light() => bishops_light += 1,
            PieceKind::Bishop => bishops_dark += 1,
        }
    }

    let minors = knights + bishops_light + bishops_dark;
    if minors <= 1 {
        return true;
    }
    knights == 0 && (bishops_light == 0 || bishops_dark == 0)
}

/// Convenience for UI banners: the side that delivered mate, if any.
#[must_use]
pub fn winner(state: &GameState) -> Option<Color> {
    (status(state) == GameStatus::Checkmate).then(|| state.side_to_move.opponent())
}
