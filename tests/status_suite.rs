use serde::Deserialize;

use chess_rules::game::{all_legal_moves, import_fen, status, GameStatus};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    status: String,
    legal_moves: usize,
}

fn status_from_name(name: &str) -> GameStatus {
    match name {
        "ongoing" => GameStatus::Ongoing,
        "check" => GameStatus::Check,
        "checkmate" => GameStatus::Checkmate,
        "stalemate" => GameStatus::Stalemate,
        "draw_fifty_move" => GameStatus::DrawFiftyMove,
        "draw_repetition" => GameStatus::DrawRepetition,
        other => panic!("unknown status '{other}' in positions.json"),
    }
}

#[test]
fn status_suite() {
    let data = include_str!("data/positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("positions.json is valid");
    assert!(!set.positions.is_empty());

    for position in &set.positions {
        let state = import_fen(&position.fen)
            .unwrap_or_else(|e| panic!("{}: bad FEN: {e}", position.name));
        assert_eq!(
            status(&state),
            status_from_name(&position.status),
            "status mismatch for {}",
            position.name
        );
        assert_eq!(
            all_legal_moves(&state).len(),
            position.legal_moves,
            "legal move count mismatch for {}",
            position.name
        );
    }
}
