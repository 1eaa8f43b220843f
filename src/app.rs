#![warn(clippy::all, clippy::pedantic)]

use log::{debug, info};

use crate::components::{PieceColor, Position};
use crate::config::GameConfig;
use crate::input::Command;
use crate::session::Session;
use crate::systems::{game_tick_system, input_system};

pub type AppResult<T> = anyhow::Result<T>;

/// How a cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Locked,
    Active(PieceColor),
}

pub struct App {
    pub session: Session,
    pub config: GameConfig,
    pub should_quit: bool,
    pub paused_for_resize: bool,
    pub game_over_timer: f32,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let session = Session::new(&config);
        Self::with_session(config, session)
    }

    #[must_use]
    pub fn with_session(config: GameConfig, session: Session) -> Self {
        Self {
            session,
            config,
            should_quit: false,
            paused_for_resize: false,
            game_over_timer: 0.0,
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        if command == Command::Quit {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        if self.paused_for_resize {
            return;
        }

        let changed = input_system(&mut self.session, command);
        debug!("Command {command:?} applied: {changed}");
    }

    pub fn on_tick(&mut self, delta_seconds: f32) {
        if self.session.is_terminated() {
            // Hold the game over banner, then leave
            self.game_over_timer += delta_seconds;
            if self.game_over_timer >= self.config.game_over_hold && !self.should_quit {
                info!("Game over hold elapsed, exiting");
                self.should_quit = true;
            }
            return;
        }

        if self.paused_for_resize {
            return;
        }

        game_tick_system(&mut self.session, delta_seconds);
    }

    #[must_use]
    pub fn get_render_blocks(&self) -> Vec<(Position, BlockKind)> {
        let mut blocks: Vec<_> = self
            .session
            .board
            .occupied_cells()
            .map(|position| (position, BlockKind::Locked))
            .collect();

        if let Some(tetromino) = self.session.active() {
            blocks.extend(
                tetromino
                    .occupied_cells()
                    .map(|position| (position, BlockKind::Active(tetromino.color))),
            );
        }

        blocks
    }
}
