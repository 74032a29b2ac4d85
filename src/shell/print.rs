//! Text rendering of the board and game banners.

use std::io::{self, Write};
use std::time::Duration;

use super::options::ShellOptions;
use crate::board::{Color, Square};
use crate::game::{Game, GameState, GameStatus};

/// Draw the board, one line per rank.
///
/// Squares in `marked` (the destinations of a selected piece) are flagged
/// with `*`; empty squares show as `.`.
#[must_use]
pub fn render_board(state: &GameState, options: &ShellOptions, marked: &[Square]) -> String {
    let ranks: Vec<usize> = if options.flip {
        (0..8).collect()
    } else {
        (0..8).rev().collect()
    };
    let files: Vec<usize> = if options.flip {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut out = String::new();
    for &rank in &ranks {
        if options.coordinates {
            out.push_str(&format!("{} ", rank + 1));
        }
        for &file in &files {
            let sq = Square::from_index(rank * 8 + file);
            let symbol = match state.piece_at(sq) {
                Some(piece) if options.glyphs => piece.glyph(),
                Some(piece) => piece.fen_char(),
                None => '.',
            };
            out.push(if marked.contains(&sq) { '*' } else { ' ' });
            out.push(symbol);
        }
        out.push('\n');
    }
    if options.coordinates {
        out.push_str("  ");
        for &file in &files {
            out.push(' ');
            out.push((b'a' + file as u8) as char);
        }
        out.push('\n');
    }
    out
}

/// Whose turn it is, or how the game ended.
#[must_use]
pub fn status_banner(game: &Game) -> String {
    let side = game.side_to_move();
    match game.status() {
        GameStatus::Ongoing => format!("{side} to move"),
        GameStatus::Check => format!("{side} to move (check)"),
        GameStatus::Checkmate => format!("Checkmate: {} wins", side.opponent()),
        status => format!("Draw: {status}"),
    }
}

pub fn print_perft_info<W: Write>(
    out: &mut W,
    depth: usize,
    nodes: u64,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(
        out,
        "perft depth {} nodes {} time_ms {}",
        depth,
        nodes,
        elapsed.as_millis()
    )
}

/// Move number prefix in the usual `12.` / `12...` style.
#[must_use]
pub fn move_number(state: &GameState) -> String {
    match state.side_to_move() {
        Color::White => format!("{}.", state.fullmove_number()),
        Color::Black => format!("{}...", state.fullmove_number()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_initial_with_letters() {
        let options = ShellOptions {
            glyphs: false,
            flip: false,
            coordinates: true,
        };
        let text = render_board(&GameState::starting_position(), &options, &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn test_render_marks_and_flip() {
        let options = ShellOptions {
            glyphs: false,
            flip: true,
            coordinates: false,
        };
        let e3: Square = "e3".parse().unwrap();
        let text = render_board(&GameState::starting_position(), &options, &[e3]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " R N B K Q B N R");
        assert_eq!(lines[2], " . . .*. . . . .");
    }

    #[test]
    fn test_glyphs() {
        let text = render_board(&GameState::starting_position(), &ShellOptions::default(), &[]);
        assert!(text.contains('♔'));
        assert!(text.contains('♚'));
    }

    #[test]
    fn test_banner() {
        let mut game = Game::new();
        assert_eq!(status_banner(&game), "White to move");
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.play_uci(mv).unwrap();
        }
        assert_eq!(status_banner(&game), "Checkmate: Black wins");
        assert_eq!(move_number(game.state()), "3.");
    }
}
