//! Move type and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::PieceKind;
use super::square::Square;

/// What kind of move this is, beyond its squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveFlag {
    Normal,
    Capture,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// A move: origin, destination, optional promotion kind and a flag.
///
/// Moves are plain values; the generator produces them and `apply_move`
/// consumes them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub flag: MoveFlag,
}

impl Move {
    /// A quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, MoveFlag::Normal)
    }

    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, MoveFlag::Capture)
    }

    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, MoveFlag::DoublePawnPush)
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, MoveFlag::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        let flag = match side {
            CastleSide::Kingside => MoveFlag::CastleKingside,
            CastleSide::Queenside => MoveFlag::CastleQueenside,
        };
        Move::with_flag(from, to, flag)
    }

    /// A promotion, capturing or not.
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, kind: PieceKind, capture: bool) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
            flag: if capture {
                MoveFlag::Capture
            } else {
                MoveFlag::Normal
            },
        }
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flag,
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self.flag, MoveFlag::Capture | MoveFlag::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag, MoveFlag::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.flag, MoveFlag::DoublePawnPush)
    }

    /// The castling wing, if this is a castle.
    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.flag {
            MoveFlag::CastleKingside => Some(CastleSide::Kingside),
            MoveFlag::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.castle_side().is_some()
    }

    /// Same squares and promotion; the flag is ignored.
    #[inline]
    #[must_use]
    pub fn same_squares(self, other: Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }

    /// Key used to keep generator output in a stable order.
    #[inline]
    pub(crate) fn sort_key(self) -> (usize, usize, Option<PieceKind>) {
        (self.to.index(), self.from.index(), self.promotion)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        match self.flag {
            MoveFlag::Normal => {}
            MoveFlag::Capture => write!(f, " cap")?,
            MoveFlag::DoublePawnPush => write!(f, " double")?,
            MoveFlag::EnPassant => write!(f, " ep")?,
            MoveFlag::CastleKingside => write!(f, " O-O")?,
            MoveFlag::CastleQueenside => write!(f, " O-O-O")?,
        }
        write!(f, ")")
    }
}

/// Coordinate notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// An owned list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn extend(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    /// Sort ascending by destination square, then origin, then promotion.
    pub(crate) fn sort(&mut self) {
        self.moves.sort_by_key(|m| m.sort_key());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Find a move with the given squares and promotion.
    #[must_use]
    pub fn find(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<Move> {
        self.moves
            .iter()
            .copied()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
    }

    /// Destination squares, deduplicated, ascending. Promotions collapse to one square.
    #[must_use]
    pub fn destinations(&self) -> Vec<Square> {
        let mut squares: Vec<Square> = self.moves.iter().map(|m| m.to).collect();
        squares.sort();
        squares.dedup();
        squares
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}
