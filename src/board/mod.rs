//! Board representation: squares, pieces, moves and piece placement.
//!
//! The board is a 64-entry mailbox. It stores pieces and nothing else;
//! turn order, castling rights and counters live in [`GameState`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Piece, PieceKind, Square};
//!
//! let board = Board::starting_position();
//! let e1: Square = "e1".parse().unwrap();
//! assert_eq!(board.get(e1), Some(Piece::new(PieceKind::King, Color::White)));
//! ```
//!
//! [`GameState`]: crate::game::GameState

mod builder;
mod error;
mod state;
mod types;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use state::Board;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveFlag, MoveList, Piece, PieceKind, Square,
};

pub(crate) use types::PROMOTION_KINDS;
