//! A game in progress: current state, move log and repetition counts.

use super::apply::{commit_move, make_move_unchecked, parse_move};
use super::history::{MoveLog, RepetitionTable};
use super::legality;
use super::status::{self, status_with_repetitions, GameStatus};
use super::{export_fen, import_fen, GameState};
use crate::board::{Color, FenError, Move, MoveError, MoveFlag, MoveList, PieceKind, Square};

/// A game session.
///
/// Wraps a [`GameState`] with the log of moves that produced it. The log
/// drives threefold repetition and undo; undo rebuilds the previous state
/// by replaying the log from the position the game started in.
#[derive(Clone, Debug)]
pub struct Game {
    initial: GameState,
    state: GameState,
    log: MoveLog,
    repetitions: RepetitionTable,
}

impl Game {
    /// A new game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_state(GameState::starting_position())
    }

    /// A new game starting from an arbitrary position.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        let mut repetitions = RepetitionTable::new();
        repetitions.increment(state.position_key());
        Game {
            initial: state.clone(),
            state,
            log: MoveLog::new(),
            repetitions,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        import_fen(fen).map(Game::from_state)
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn initial_state(&self) -> &GameState {
        &self.initial
    }

    #[inline]
    #[must_use]
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[must_use]
    pub fn fen(&self) -> String {
        export_fen(&self.state)
    }

    /// Legal moves for the piece on `square`. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> MoveList {
        if self.status().is_terminal() {
            return MoveList::new();
        }
        legality::legal_moves(&self.state, square)
    }

    #[must_use]
    pub fn all_legal_moves(&self) -> MoveList {
        if self.status().is_terminal() {
            return MoveList::new();
        }
        legality::all_legal_moves(&self.state)
    }

    /// Play a move and report the status of the resulting position.
    ///
    /// Moves are rejected once the game has reached a terminal status.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        self.ensure_ongoing()?;
        let (played, next) = commit_move(&self.state, mv)?;

        let key = next.position_key();
        self.state = next;
        self.log.push(played, key);
        let seen = self.repetitions.increment(key);

        let status = status_with_repetitions(&self.state, seen);
        if status.is_terminal() {
            log::debug!("game ended after {played}: {status}");
        } else {
            log::trace!("after {played}: {status}, position seen {seen}x");
        }
        Ok(status)
    }

    /// Play a move given in coordinate notation such as `e2e4` or `e7e8q`.
    pub fn play_uci(&mut self, notation: &str) -> Result<GameStatus, MoveError> {
        self.ensure_ongoing()?;
        let mv = parse_move(&self.state, notation)?;
        self.play(mv)
    }

    /// Play a move given as raw file/rank coordinates, as a board UI
    /// reports clicks. Coordinates outside 0-7 yield `OutOfRange`.
    pub fn play_coords(
        &mut self,
        from_file: usize,
        from_rank: usize,
        to_file: usize,
        to_rank: usize,
        promotion: Option<PieceKind>,
    ) -> Result<GameStatus, MoveError> {
        let from = Square::new(from_file, from_rank)?;
        let to = Square::new(to_file, to_rank)?;
        self.play(Move {
            from,
            to,
            promotion,
            flag: MoveFlag::Normal,
        })
    }

    /// Take back the last move, returning it. `None` at the start of the game.
    pub fn undo(&mut self) -> Option<Move> {
        let last = *self.log.last()?;
        self.repetitions.decrement(last.key);

        let log = self.log.truncated(self.log.len() - 1);
        let state = log
            .moves()
            .fold(self.initial.clone(), |state, mv| make_move_unchecked(&state, mv));

        log::debug!("undo {}", last.mv);
        self.log = log;
        self.state = state;
        Some(last.mv)
    }

    /// Status of the current position, including threefold repetition.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        status_with_repetitions(&self.state, self.repetition_count())
    }

    /// How many times the current position has occurred in this game.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(self.state.position_key())
    }

    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        status::is_insufficient_material(&self.state)
    }

    /// The side that delivered mate, if the game ended that way.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        (self.status() == GameStatus::Checkmate).then(|| self.state.side_to_move.opponent())
    }

    fn ensure_ongoing(&self) -> Result<(), MoveError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(MoveError::GameOver { status });
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
