use super::error::SquareError;
use super::{Color, Piece, PieceKind, Square};

/// Piece placement: one optional piece per square.
///
/// Pure storage. Nothing here checks chess rules; that is the job of the
/// generator and the legality filter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard initial placement.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            for color in Color::BOTH {
                let home = Square::from_index(color.back_rank() * 8 + file);
                let pawn = Square::from_index(color.pawn_start_rank() * 8 + file);
                board.set(home, Some(Piece::new(kind, color)));
                board.set(pawn, Some(Piece::new(PieceKind::Pawn, color)));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Place or clear a piece, returning what was there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.index()], piece)
    }

    /// `get` by raw coordinates.
    pub fn get_at(&self, file: usize, rank: usize) -> Result<Option<Piece>, SquareError> {
        Ok(self.get(Square::new(file, rank)?))
    }

    /// `set` by raw coordinates.
    pub fn set_at(
        &mut self,
        file: usize,
        rank: usize,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, SquareError> {
        Ok(self.set(Square::new(file, rank)?, piece))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Square of `color`'s king, if it has one.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(PieceKind::King, color));
        Square::all().find(|&sq| self.get(sq) == king)
    }

    /// Squares holding pieces of `color`, ascending.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    /// All occupied squares, ascending.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Number of pieces of a given kind and color.
    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.squares.iter().filter(|p| **p == Some(piece)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_get_set() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(board.set(sq("c6"), Some(knight)), None);
        assert_eq!(board.get(sq("c6")), Some(knight));
        assert_eq!(board.set(sq("c6"), None), Some(knight));
        assert!(board.is_empty(sq("c6")));
    }

    #[test]
    fn test_coordinate_access_out_of_range() {
        let mut board = Board::empty();
        assert_eq!(
            board.get_at(8, 0),
            Err(SquareError::OutOfRange { file: 8, rank: 0 })
        );
        assert!(board.set_at(0, 9, None).is_err());
        assert_eq!(board.get_at(4, 0), Ok(None));
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(Color::White), Some(sq("e1")));
        assert_eq!(board.find_king(Color::Black), Some(sq("e8")));
        assert_eq!(
            board.get(sq("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(
            board.count(Piece::new(PieceKind::Pawn, Color::Black)),
            8
        );
    }

    #[test]
    fn test_find_king_missing() {
        assert_eq!(Board::empty().find_king(Color::White), None);
    }
}
