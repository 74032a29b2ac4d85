//! Chess rules core: legal move generation, move application, game status
//! and FEN, plus a game session with undo and a small text shell.
//!
//! ```
//! use chess_rules::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4"] {
//!     game.play_uci(mv).unwrap();
//! }
//! assert_eq!(game.play_uci("d8h4"), Ok(GameStatus::Checkmate));
//! ```

pub mod board;
pub mod game;
pub mod shell;
pub mod sync;
mod zobrist;

pub use board::{Board, Color, Move, MoveError, Piece, PieceKind, Square};
pub use game::{apply_move, export_fen, import_fen, legal_moves, status, Game, GameState, GameStatus};
pub use sync::SharedGame;
