//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as (file, rank), both 0-7.
///
/// File 0 is the a-file, rank 0 is White's back rank. Squares order by
/// index (a1=0, b1=1, ..., h8=63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square, rejecting coordinates outside the board.
    pub fn new(file: usize, rank: usize) -> Result<Self, SquareError> {
        if file < 8 && rank < 8 {
            Ok(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(SquareError::OutOfRange { file, rank })
        }
    }

    /// Create a square from an index (0-63). Indices wrap into range.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        let idx = idx % 64;
        Square {
            file: (idx % 8) as u8,
            rank: (idx / 8) as u8,
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    /// File (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// Square index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Same file, different rank.
    #[inline]
    #[must_use]
    pub(crate) const fn with_rank(self, rank: usize) -> Square {
        Square {
            file: self.file,
            rank: rank as u8,
        }
    }

    /// True for light squares (h1 is light).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(file, rank)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Ok(Square { file, rank })
    }
}
