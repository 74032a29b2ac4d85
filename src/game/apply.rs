//! Move applier: the only code that turns one `GameState` into the next.

use super::legality::legal_moves;
use super::GameState;
use crate::board::{CastleSide, Color, Move, MoveError, MoveFlag, Piece, PieceKind, Square};

/// Commit a move, returning the resulting state.
///
/// The move is matched against the legal moves of its origin square by
/// squares and promotion kind; the flag is taken from the generator, so
/// callers may build moves with [`Move::quiet`]. `state` is never changed,
/// whether the move is accepted or rejected.
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState, MoveError> {
    commit_move(state, mv).map(|(_, next)| next)
}

/// Like [`apply_move`], also returning the move as the generator flagged it.
pub(crate) fn commit_move(state: &GameState, mv: Move) -> Result<(Move, GameState), MoveError> {
    match resolve_move(state, mv) {
        Ok(resolved) => {
            log::debug!("applying {resolved:?} for {}", state.side_to_move);
            Ok((resolved, make_move_unchecked(state, resolved)))
        }
        Err(e) => {
            log::debug!("rejected {mv}: {e}");
            Err(e)
        }
    }
}

/// Parse coordinate notation (`e2e4`, `e7e8q`) into the matching legal move.
pub fn parse_move(state: &GameState, notation: &str) -> Result<Move, MoveError> {
    let parse_error = || MoveError::Parse {
        notation: notation.to_string(),
    };
    let text = notation.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(parse_error());
    }
    let from: Square = text[0..2].parse().map_err(|_| parse_error())?;
    let to: Square = text[2..4].parse().map_err(|_| parse_error())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => Some(PieceKind::from_char(c).ok_or_else(parse_error)?),
    };
    let candidate = Move {
        from,
        to,
        promotion,
        flag: MoveFlag::Normal,
    };
    resolve_move(state, candidate)
}

/// Validate `mv` and return the generator's version of it.
pub(crate) fn resolve_move(state: &GameState, mv: Move) -> Result<Move, MoveError> {
    let piece = state
        .board
        .get(mv.from)
        .ok_or(MoveError::NoPieceAtSquare { square: mv.from })?;
    if piece.color != state.side_to_move {
        return Err(MoveError::NotYourTurn { square: mv.from });
    }

    let reaches_last_rank =
        piece.kind == PieceKind::Pawn && mv.to.rank() == piece.color.pawn_promotion_rank();
    if let Some(kind) = mv.promotion {
        if !kind.is_promotion_target() || !reaches_last_rank {
            return Err(MoveError::InvalidPromotion { mv });
        }
    }

    let candidates = legal_moves(state, mv.from);
    if mv.promotion.is_none()
        && reaches_last_rank
        && candidates
            .iter()
            .any(|legal| legal.from == mv.from && legal.to == mv.to)
    {
        return Err(MoveError::InvalidPromotion { mv });
    }

    candidates
        .iter()
        .copied()
        .find(|legal| legal.same_squares(mv))
        .ok_or(MoveError::IllegalMove { mv })
}

/// Apply a move already known to be pseudo-legal. No validation.
pub(crate) fn make_move_unchecked(state: &GameState, mv: Move) -> GameState {
    let mut next = state.clone();
    let mover = state.side_to_move;

    let Some(moving) = next.board.set(mv.from, None) else {
        return next;
    };

    let captured = if mv.is_en_passant() {
        next.board.set(mv.to.with_rank(mv.from.rank()), None)
    } else {
        next.board.get(mv.to)
    };

    if let Some(side) = mv.castle_side() {
        next.board.set(mv.to, Some(moving));
        let rank = mv.from.rank();
        let rook_from = Square::from_index(rank * 8 + side.rook_file());
        let rook_to = Square::from_index(rank * 8 + side.rook_to_file());
        let rook = next.board.set(rook_from, None);
        next.board.set(rook_to, rook);
    } else {
        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, mover),
            None => moving,
        };
        next.board.set(mv.to, Some(placed));
    }

    if moving.kind == PieceKind::King {
        next.castling_rights.remove_color(mover);
    }
    for sq in [mv.from, mv.to] {
        if let Some((color, side)) = rook_home(sq) {
            next.castling_rights.remove(color, side);
        }
    }

    next.en_passant_target = if mv.is_double_pawn_push() {
        Some(mv.from.with_rank((mv.from.rank() + mv.to.rank()) / 2))
    } else {
        None
    };

    if moving.kind == PieceKind::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }
    next.side_to_move = mover.opponent();
    next
}

/// The castling right tied to a rook's home corner.
fn rook_home(sq: Square) -> Option<(Color, CastleSide)> {
    let color = match sq.rank() {
        0 => Color::White,
        7 => Color::Black,
        _ => return None,
    };
    let side = match sq.file() {
        0 => CastleSide::Queenside,
        7 => CastleSide::Kingside,
        _ => return None,
    };
    Some((color, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{export_fen, import_fen};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn play(state: &GameState, notation: &str) -> GameState {
        let mv = parse_move(state, notation).unwrap();
        apply_move(state, mv).unwrap()
    }

    #[test]
    fn test_quiet_move_updates_counters() {
        let state = GameState::starting_position();
        let next = play(&state, "g1f3");
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.halfmove_clock(), 1);
        assert_eq!(next.fullmove_number(), 1);
        let next = play(&next, "g8f6");
        assert_eq!(next.halfmove_clock(), 2);
        assert_eq!(next.fullmove_number(), 2);
    }

    #[test]
    fn test_double_push_sets_en_passant_target() {
        let next = play(&GameState::starting_position(), "e2e4");
        assert_eq!(next.en_passant_target(), Some(sq("e3")));
        assert_eq!(next.halfmove_clock(), 0);
        let after = play(&next, "g8f6");
        assert_eq!(after.en_passant_target(), None);
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let state =
            import_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
        let next = play(&state, "e5d6");
        assert!(next.piece_at(sq("d5")).is_none());
        assert_eq!(
            next.piece_at(sq("d6")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(next.piece_at(sq("e5")).is_none());
        assert_eq!(next.halfmove_clock(), 0);
    }

    #[test]
    fn test_castling_moves_rook_and_clears_rights() {
        let state = import_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 5 10").unwrap();
        let next = play(&state, "e1g1");
        assert_eq!(
            next.piece_at(sq("g1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            next.piece_at(sq("f1")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert!(next.piece_at(sq("h1")).is_none());
        assert!(!next.castling_rights().has(Color::White, CastleSide::Kingside));
        assert!(!next.castling_rights().has(Color::White, CastleSide::Queenside));
        assert!(next.castling_rights().has(Color::Black, CastleSide::Kingside));
        assert_eq!(next.halfmove_clock(), 6);

        let next = play(&next, "e8c8");
        assert_eq!(
            next.piece_at(sq("d8")),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert!(next.castling_rights().is_empty());
        assert_eq!(next.fullmove_number(), 11);
    }

    #[test]
    fn test_rook_move_and_capture_narrow_rights() {
        let state = import_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let next = play(&state, "a1a8");
        let rights = next.castling_rights();
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert!(!rights.has(Color::Black, CastleSide::Queenside));
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(rights.has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_promotion_requires_kind() {
        let state = import_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let bare = Move::quiet(sq("a7"), sq("a8"));
        assert_eq!(
            apply_move(&state, bare),
            Err(MoveError::InvalidPromotion { mv: bare })
        );
        let next = play(&state, "a7a8n");
        assert_eq!(
            next.piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
    }

    #[test]
    fn test_diagonal_step_to_empty_last_rank_is_illegal() {
        let state = import_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = Move::quiet(sq("a7"), sq("b8"));
        assert_eq!(apply_move(&state, mv), Err(MoveError::IllegalMove { mv }));
        assert!(matches!(
            parse_move(&state, "a7b8"),
            Err(MoveError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_counters_saturate_at_max() {
        let state = import_fen("4k3/8/8/8/8/8/8/4K1N1 w - - 4294967295 1").unwrap();
        let next = play(&state, "g1f3");
        assert_eq!(next.halfmove_clock(), u32::MAX);

        let state = import_fen("4k1n1/8/8/8/8/8/8/4K3 b - - 0 4294967295").unwrap();
        let next = play(&state, "g8f6");
        assert_eq!(next.fullmove_number(), u32::MAX);
        assert_eq!(import_fen(&export_fen(&next)), Ok(next));
    }

    #[test]
    fn test_promotion_forbidden_elsewhere() {
        let state = GameState::starting_position();
        let mv = Move::promotion(sq("e2"), sq("e4"), PieceKind::Queen, false);
        assert_eq!(
            apply_move(&state, mv),
            Err(MoveError::InvalidPromotion { mv })
        );
        let king_promo = Move::promotion(sq("a7"), sq("a8"), PieceKind::King, false);
        let state = import_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(matches!(
            apply_move(&state, king_promo),
            Err(MoveError::InvalidPromotion { .. })
        ));
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let state = GameState::starting_position();
        let before = export_fen(&state);

        let empty = Move::quiet(sq("e4"), sq("e5"));
        assert_eq!(
            apply_move(&state, empty),
            Err(MoveError::NoPieceAtSquare { square: sq("e4") })
        );
        let black = Move::quiet(sq("e7"), sq("e5"));
        assert_eq!(
            apply_move(&state, black),
            Err(MoveError::NotYourTurn { square: sq("e7") })
        );
        let too_far = Move::quiet(sq("e2"), sq("e5"));
        assert_eq!(
            apply_move(&state, too_far),
            Err(MoveError::IllegalMove { mv: too_far })
        );
        let own_piece = Move::quiet(sq("a1"), sq("a2"));
        assert!(matches!(
            apply_move(&state, own_piece),
            Err(MoveError::IllegalMove { .. })
        ));

        assert_eq!(export_fen(&state), before);
    }

    #[test]
    fn test_flag_comes_from_generator() {
        let state = GameState::starting_position();
        let next = apply_move(&state, Move::quiet(sq("e2"), sq("e4"))).unwrap();
        assert_eq!(next.en_passant_target(), Some(sq("e3")));
        let resolved = resolve_move(&state, Move::quiet(sq("e2"), sq("e4"))).unwrap();
        assert_eq!(resolved.flag, MoveFlag::DoublePawnPush);
    }

    #[test]
    fn test_parse_move_errors() {
        let state = GameState::starting_position();
        assert!(matches!(
            parse_move(&state, "e2"),
            Err(MoveError::Parse { .. })
        ));
        assert!(matches!(
            parse_move(&state, "z9z9"),
            Err(MoveError::Parse { .. })
        ));
        assert!(matches!(
            parse_move(&state, "e2e4x"),
            Err(MoveError::Parse { .. })
        ));
        assert!(matches!(
            parse_move(&state, "e2e5"),
            Err(MoveError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_move_promotion() {
        let state = import_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = parse_move(&state, "a7a8q").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert!(matches!(
            parse_move(&state, "a7a8p"),
            Err(MoveError::InvalidPromotion { .. })
        ));
    }
}
