use once_cell::sync::Lazy;

use crate::board::Square;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn step_targets(deltas: &[(i8, i8)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        let mut targets: Vec<Square> = deltas
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect();
        targets.sort();
        targets
    })
}

/// Knight destinations from each square, ascending.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(&KNIGHT_DELTAS));

/// King step destinations from each square, ascending.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| step_targets(&KING_DELTAS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_targets_corner_and_center() {
        assert_eq!(KNIGHT_TARGETS[0].len(), 2);
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(KNIGHT_TARGETS[d4.index()].len(), 8);
    }

    #[test]
    fn test_king_targets_edge() {
        let e1: Square = "e1".parse().unwrap();
        assert_eq!(KING_TARGETS[e1.index()].len(), 5);
        assert_eq!(KING_TARGETS[0].len(), 3);
    }
}
