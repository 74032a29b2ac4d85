//! Error types for board and game operations.

use std::fmt;

use super::{Move, Square};
use crate::game::GameStatus;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File or rank outside 0-7
    OutOfRange { file: usize, rank: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { file, rank } => {
                write!(f, "Square (file {file}, rank {rank}) out of range (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected moves.
///
/// A rejected move never changes the game state it was tried against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate was outside the board
    OutOfRange { file: usize, rank: usize },
    /// The origin square is empty
    NoPieceAtSquare { square: Square },
    /// The origin square holds a piece of the side not to move
    NotYourTurn { square: Square },
    /// The move breaks the piece's movement rule or leaves the king in check
    IllegalMove { mv: Move },
    /// Promotion kind missing where required, or present where forbidden
    InvalidPromotion { mv: Move },
    /// Malformed coordinate notation
    Parse { notation: String },
    /// The game has already ended
    GameOver { status: GameStatus },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { file, rank } => {
                write!(f, "Square (file {file}, rank {rank}) is off the board")
            }
            MoveError::NoPieceAtSquare { square } => write!(f, "No piece on {square}"),
            MoveError::NotYourTurn { square } => {
                write!(f, "The piece on {square} belongs to the side not to move")
            }
            MoveError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
            MoveError::InvalidPromotion { mv } => write!(f, "Invalid promotion in '{mv}'"),
            MoveError::Parse { notation } => write!(f, "Cannot parse move '{notation}'"),
            MoveError::GameOver { status } => write!(f, "Game is over ({status})"),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        match e {
            SquareError::OutOfRange { file, rank } => MoveError::OutOfRange { file, rank },
            SquareError::InvalidNotation { notation } => MoveError::Parse { notation },
        }
    }
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN must have exactly six space-separated fields
    WrongFieldCount { found: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// Placement field does not have eight ranks
    InvalidRankCount { found: usize },
    /// A rank does not describe exactly eight files
    InvalidRankLength { rank: usize, files: usize },
    /// Side to move must be 'w' or 'b'
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a valid number
    InvalidCounter { found: String },
    /// Each side needs exactly one king
    KingCount { white: usize, black: usize },
    /// The side that just moved was left in check
    OpponentInCheck,
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::KingCount { white, black } => {
                write!(
                    f,
                    "Each side needs exactly one king (white {white}, black {black})"
                )
            }
            FenError::OpponentInCheck => {
                write!(f, "The side not to move is in check")
            }
        }
    }
}

impl std::error::Error for FenError {}
