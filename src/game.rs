#![warn(clippy::all, clippy::pedantic)]

// Game board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Game timing
pub const GRAVITY_INTERVAL: f32 = 0.8; // Seconds between automatic drops
pub const GAME_OVER_HOLD: f32 = 2.0; // Seconds the game over banner stays up before exit
pub const FRAME_RATE: u32 = 60;

// Scoring
pub const LINE_CLEAR_BONUS: u32 = 10; // Flat points per cleared row

// Pieces spawn this many columns left of the board centre
pub const SPAWN_OFFSET: usize = 2;

#[must_use]
pub fn spawn_column(board_width: usize) -> i32 {
    (board_width / 2).saturating_sub(SPAWN_OFFSET) as i32
}
