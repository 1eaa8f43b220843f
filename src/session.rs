#![warn(clippy::all, clippy::pedantic)]

use log::info;

use crate::components::{Board, GameState, Tetromino};
use crate::config::GameConfig;
use crate::rng::Spawner;
use crate::systems::spawn_tetromino;

/// Where the session is in its spawn / fall / game over cycle.
///
/// `Spawning` is transient: the controller resolves it into `Falling` or
/// `Terminated` before handing control back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Spawning,
    Falling(Tetromino),
    Terminated,
}

/// One game: the board, the score, the active piece and the piece sources.
///
/// The session is the only writer of board and piece state.
#[derive(Debug)]
pub struct Session {
    pub board: Board,
    pub game_state: GameState,
    pub state: SessionState,
    pub gravity_interval: f32,
    pub line_clear_bonus: u32,
    pub spawner: Spawner,
}

impl Session {
    /// Start a session, seeded from the config when it carries a seed.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let spawner = match config.seed {
            Some(seed) => Spawner::seeded(seed),
            None => Spawner::from_entropy(),
        };
        Self::with_spawner(config, spawner)
    }

    /// Start a session on an empty board and spawn the first piece.
    #[must_use]
    pub fn with_spawner(config: &GameConfig, spawner: Spawner) -> Self {
        Self::with_board(
            config,
            Board::new(config.board_width, config.board_height),
            spawner,
        )
    }

    /// Start a session on a prepared board and spawn the first piece.
    #[must_use]
    pub fn with_board(config: &GameConfig, board: Board, spawner: Spawner) -> Self {
        let mut session = Self {
            board,
            game_state: GameState::default(),
            state: SessionState::Spawning,
            gravity_interval: config.gravity_interval,
            line_clear_bonus: config.line_clear_bonus,
            spawner,
        };
        info!(
            "Starting session on a {}x{} board",
            session.board.width, session.board.height
        );
        spawn_tetromino(&mut session);
        session
    }

    #[must_use]
    pub fn active(&self) -> Option<&Tetromino> {
        match &self.state {
            SessionState::Falling(tetromino) => Some(tetromino),
            _ => None,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.game_state.score
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }
}
