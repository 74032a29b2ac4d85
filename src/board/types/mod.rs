//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - pieces and their owners
//! - `Square` - a board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveFlag, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;
