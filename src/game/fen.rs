use std::fmt;
use std::str::FromStr;

use super::{in_check, GameState};
use crate::board::{
    Board, CastleSide, CastlingRights, Color, FenError, Piece, PieceKind, Square,
};

/// FEN of the standard initial position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a full six-field FEN string.
///
/// Besides syntax, the position must have exactly one king per side, the
/// side not to move must not be in check, and an en passant square must sit
/// on the rank a pawn of the side not to move just crossed.
pub fn import_fen(fen: &str) -> Result<GameState, FenError> {
    let result = parse_fen(fen);
    if let Err(e) = &result {
        log::debug!("rejected FEN '{fen}': {e}");
    }
    result
}

fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 6 {
        return Err(FenError::WrongFieldCount { found: parts.len() });
    }

    let board = parse_placement(parts[0])?;

    let side_to_move = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    let castling_rights = parse_castling(parts[2])?;

    let en_passant_target = if parts[3] == "-" {
        None
    } else {
        let invalid = || FenError::InvalidEnPassant {
            found: parts[3].to_string(),
        };
        let sq: Square = parts[3].parse().map_err(|_| invalid())?;
        let expected_rank = match side_to_move {
            Color::White => 5,
            Color::Black => 2,
        };
        if sq.rank() != expected_rank {
            return Err(invalid());
        }
        Some(sq)
    };

    let halfmove_clock = parse_counter(parts[4])?;
    let fullmove_number = parse_counter(parts[5])?;
    if fullmove_number == 0 {
        return Err(FenError::InvalidCounter {
            found: parts[5].to_string(),
        });
    }

    let white = board.count(Piece::new(PieceKind::King, Color::White));
    let black = board.count(Piece::new(PieceKind::King, Color::Black));
    if white != 1 || black != 1 {
        return Err(FenError::KingCount { white, black });
    }

    let state = GameState {
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    };
    if in_check(&state, side_to_move.opponent()) {
        return Err(FenError::OpponentInCheck);
    }
    Ok(state)
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPiece { char: c });
                }
                file += skip as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::InvalidRankLength {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                board.set(Square::from_index(rank * 8 + file), Some(piece));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::InvalidRankLength {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::Kingside),
            'Q' => (Color::White, CastleSide::Queenside),
            'k' => (Color::Black, CastleSide::Kingside),
            'q' => (Color::Black, CastleSide::Queenside),
            _ => return Err(invalid()),
        };
        if rights.has(color, side) {
            return Err(invalid());
        }
        rights.set(color, side);
    }
    Ok(rights)
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}

/// Write the state as a six-field FEN string.
#[must_use]
pub fn export_fen(state: &GameState) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(8);
    for rank in (0..8).rev() {
        let mut row = String::new();
        let mut empty = 0;
        for file in 0..8 {
            match state.board.get(Square::from_index(rank * 8 + file)) {
                Some(piece) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            row.push_str(&empty.to_string());
        }
        rows.push(row);
    }

    let active = match state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };

    let mut castling = String::new();
    for (color, side, letter) in [
        (Color::White, CastleSide::Kingside, 'K'),
        (Color::White, CastleSide::Queenside, 'Q'),
        (Color::Black, CastleSide::Kingside, 'k'),
        (Color::Black, CastleSide::Queenside, 'q'),
    ] {
        if state.castling_rights.has(color, side) {
            castling.push(letter);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let ep = state
        .en_passant_target
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());

    format!(
        "{} {} {} {} {} {}",
        rows.join("/"),
        active,
        castling,
        ep,
        state.halfmove_clock,
        state.fullmove_number
    )
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        import_fen(s)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&export_fen(self))
    }
}
