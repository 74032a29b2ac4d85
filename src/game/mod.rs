//! Chess rules over a [`GameState`]: move generation, legality, move
//! application, game status and FEN.
//!
//! Free functions work on bare states and never mutate their input.
//! [`Game`] adds the move log needed for repetition and undo.

mod apply;
mod attack_tables;
mod fen;
mod history;
mod legality;
mod movegen;
mod perft;
mod session;
mod state;
mod status;

#[cfg(test)]
mod tests;

pub use apply::{apply_move, parse_move};
pub use fen::{export_fen, import_fen, STARTING_FEN};
pub use history::{LogEntry, MoveLog};
pub use legality::{all_legal_moves, attacks_square, has_legal_moves, in_check, legal_moves};
pub use movegen::pseudo_legal_moves;
pub use session::Game;
pub use state::GameState;
pub use status::{
    is_insufficient_material, status, winner, GameStatus, FIFTY_MOVE_LIMIT, REPETITION_LIMIT,
};
