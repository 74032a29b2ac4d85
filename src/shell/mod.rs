//! Line-oriented text shell over a [`Game`].
//!
//! Stands in for a clickable board: `moves e2` selects a piece and marks
//! its destinations, `e2e4` plays a move.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::board::Square;
use crate::game::Game;

pub mod command;
pub mod options;
pub mod print;

use command::{parse_shell_command, ShellCommand};
use options::ShellOptions;
use print::{move_number, print_perft_info, render_board, status_banner};

/// Deepest perft the shell will run.
pub const MAX_PERFT_DEPTH: usize = 6;

const HELP: &str = "\
commands:
  show                 print the board
  moves [square]       legal moves of a piece, or of the side to move
  <move> | move <move> play a move in coordinate notation (e2e4, e7e8q)
  undo                 take back the last move
  new                  start a new game
  fen [fen]            print the position, or load one
  set <name> [on|off]  change an option (glyphs, flip, coordinates)
  options              list options
  status               show whose turn it is or how the game ended
  perft <depth>        count positions reachable in <depth> plies (max 6)
  quit                 leave
";

/// Shell state: the game being played and display options.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    game: Game,
    options: ShellOptions,
}

impl Shell {
    #[must_use]
    pub fn new() -> Self {
        Shell::default()
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Run one command, writing its output. Returns `false` on `quit`.
    pub fn execute<W: Write>(&mut self, cmd: ShellCommand, out: &mut W) -> io::Result<bool> {
        log::trace!("shell command {cmd:?}");
        match cmd {
            ShellCommand::Show => self.print_position(out, &[])?,
            ShellCommand::Moves(Some(square)) => match square.parse::<Square>() {
                Ok(sq) => {
                    let moves = self.game.legal_moves(sq);
                    let dests = moves.destinations();
                    self.print_position(out, &dests)?;
                    let list: Vec<String> = dests.iter().map(ToString::to_string).collect();
                    writeln!(out, "{sq}: {}", list.join(" "))?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ShellCommand::Moves(None) => {
                let list: Vec<String> = self
                    .game
                    .all_legal_moves()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "{}", list.join(" "))?;
            }
            ShellCommand::Play(notation) => {
                let number = move_number(self.game.state());
                match self.game.play_uci(&notation) {
                    Ok(status) => {
                        writeln!(out, "{number} {notation}")?;
                        self.print_position(out, &[])?;
                        if self.game.is_insufficient_material() && !status.is_terminal() {
                            writeln!(out, "note: neither side has mating material")?;
                        }
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            ShellCommand::Undo => match self.game.undo() {
                Some(mv) => {
                    writeln!(out, "took back {mv}")?;
                    self.print_position(out, &[])?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            ShellCommand::NewGame => {
                self.game = Game::new();
                self.print_position(out, &[])?;
            }
            ShellCommand::Fen(None) => writeln!(out, "{}", self.game.fen())?,
            ShellCommand::Fen(Some(fen)) => match Game::from_fen(&fen) {
                Ok(game) => {
                    self.game = game;
                    self.print_position(out, &[])?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ShellCommand::Set { name, value } => {
                match self.options.apply_set(&name, value.as_deref()) {
                    Ok(()) => write!(out, "{}", self.options.describe())?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            ShellCommand::Options => write!(out, "{}", self.options.describe())?,
            ShellCommand::Status => writeln!(out, "{}", status_banner(&self.game))?,
            ShellCommand::Perft(depth) if depth > MAX_PERFT_DEPTH => writeln!(
                out,
                "error: perft depth {depth} is above the limit of {MAX_PERFT_DEPTH}"
            )?,
            ShellCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = self.game.state().perft(depth);
                print_perft_info(out, depth, nodes, start.elapsed())?;
            }
            ShellCommand::Help => write!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(false),
            ShellCommand::Unknown(line) => writeln!(out, "unknown command '{line}' (try help)")?,
        }
        Ok(true)
    }

    fn print_position<W: Write>(&self, out: &mut W, marked: &[Square]) -> io::Result<()> {
        write!(
            out,
            "{}",
            render_board(self.game.state(), &self.options, marked)
        )?;
        writeln!(out, "{}", status_banner(&self.game))?;
        if self.game.status().is_terminal() {
            writeln!(out, "game over; undo or new to continue")?;
        }
        Ok(())
    }
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_shell_with<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut shell = Shell::new();
    shell.print_position(&mut out, &[])?;
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_shell_command(&line) else {
            continue;
        };
        if !shell.execute(cmd, &mut out)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

/// Run the shell on stdin and stdout.
pub fn run_shell() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell_with(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_shell_with(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_play_and_undo() {
        let out = run("e2e4\nundo\nquit\n");
        assert!(out.contains("1. e2e4"));
        assert!(out.contains("Black to move"));
        assert!(out.contains("took back e2e4"));
    }

    #[test]
    fn test_select_marks_destinations() {
        let out = run("moves g1\n");
        assert!(out.contains("g1: f3 h3"));
    }

    #[test]
    fn test_errors_are_reported() {
        let out = run("e2e5\nmoves z9\nset hash 1\nbogus\n");
        assert!(out.contains("error: Illegal move 'e2e5'"));
        assert!(out.contains("error: Invalid square notation 'z9'"));
        assert!(out.contains("error: Unknown option 'hash'"));
        assert!(out.contains("unknown command 'bogus'"));
    }

    #[test]
    fn test_perft_command() {
        let out = run("perft 2\n");
        assert!(out.contains("perft depth 2 nodes 400"));
    }

    #[test]
    fn test_perft_depth_is_capped() {
        let out = run("perft 12
status
");
        assert!(out.contains("error: perft depth 12 is above the limit of 6"));
        assert!(!out.contains("nodes"));
        assert!(out.contains("White to move"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = run("quit\nfen\n");
        assert!(!out.contains("KQkq"));
    }
}
