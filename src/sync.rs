//! Shared access to a game for a UI or network layer.
//!
//! One writer plays and takes back moves; any number of readers take
//! snapshots of the current position.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::{Move, MoveError};
use crate::game::{Game, GameState, GameStatus};

/// A [`Game`] behind an `Arc<RwLock<..>>`.
///
/// Cloning shares the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<RwLock<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(RwLock::new(game)))
    }

    /// Play a move under the write lock.
    pub fn play(&self, mv: Move) -> Result<GameStatus, MoveError> {
        self.0.write().play(mv)
    }

    pub fn play_uci(&self, notation: &str) -> Result<GameStatus, MoveError> {
        self.0.write().play_uci(notation)
    }

    pub fn undo(&self) -> Option<Move> {
        self.0.write().undo()
    }

    /// A copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.0.read().state().clone()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.0.read().status()
    }

    /// Run `f` with read access to the whole game.
    pub fn with_game<T>(&self, f: impl FnOnce(&Game) -> T) -> T {
        f(&self.0.read())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
