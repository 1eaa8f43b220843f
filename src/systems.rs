use log::{debug, info, trace};

use crate::components::{Board, Position, Tetromino};
use crate::game::spawn_column;
use crate::input::Command;
use crate::session::{Session, SessionState};

/// Outcome of a one-row downward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Landed,
}

/// Resolve a freshly spawned piece: it either starts falling or ends the game.
#[must_use]
pub fn place_spawn(board: &Board, tetromino: Tetromino) -> SessionState {
    if tetromino.collides_at(board, tetromino.position, tetromino.rotation) {
        SessionState::Terminated
    } else {
        SessionState::Falling(tetromino)
    }
}

/// Move the piece down one row if it can go.
pub fn step_down(board: &Board, tetromino: &mut Tetromino) -> Step {
    if tetromino.attempt_move(board, 0, 1) {
        Step::Moved
    } else {
        Step::Landed
    }
}

/// Write the piece into the board and clear any rows it completed.
pub fn lock_and_clear(board: &mut Board, tetromino: &Tetromino) -> usize {
    board.lock(tetromino.occupied_cells());
    board.clear_full_lines()
}

#[must_use]
pub fn score_for(lines_cleared: usize, bonus: u32) -> u32 {
    u32::try_from(lines_cleared)
        .unwrap_or(u32::MAX)
        .saturating_mul(bonus)
}

pub fn spawn_tetromino(session: &mut Session) {
    if session.state == SessionState::Terminated {
        return;
    }

    let (tetromino_type, color) = session.spawner.draw();

    // Start position at the top centre of the board
    let position = Position::new(spawn_column(session.board.width), 0);
    let tetromino = Tetromino::new(tetromino_type, color, position);

    session.state = place_spawn(&session.board, tetromino);

    match session.state {
        SessionState::Terminated => info!(
            "Game over: {:?} cannot spawn, final score {}",
            tetromino_type, session.game_state.score
        ),
        _ => debug!("Spawned {tetromino_type:?} in {color:?}"),
    }
}

/// Apply one player command to the active piece. Returns whether the piece
/// moved, rotated or locked.
pub fn input_system(session: &mut Session, command: Command) -> bool {
    // Soft drop shares the gravity path, including locking on landing
    if command == Command::SoftDrop {
        return gravity_system(session).is_some();
    }

    let SessionState::Falling(tetromino) = &mut session.state else {
        return false;
    };

    match command {
        Command::MoveLeft => tetromino.attempt_move(&session.board, -1, 0),
        Command::MoveRight => tetromino.attempt_move(&session.board, 1, 0),
        Command::Rotate => tetromino.attempt_rotate(&session.board),
        // Quitting is the app's concern
        Command::SoftDrop | Command::Quit => false,
    }
}

/// Drop the active piece one row, locking it when it cannot fall.
pub fn gravity_system(session: &mut Session) -> Option<Step> {
    let SessionState::Falling(tetromino) = &mut session.state else {
        return None;
    };

    let step = step_down(&session.board, tetromino);
    if step == Step::Landed {
        let landed = *tetromino;
        handle_piece_lock(session, &landed);
    } else {
        trace!(
            "Piece fell to ({}, {})",
            tetromino.position.x, tetromino.position.y
        );
    }

    Some(step)
}

/// Advance the session clock. Gravity fires once the accumulated time exceeds
/// the interval, and at most one step is applied per call.
pub fn game_tick_system(session: &mut Session, delta_seconds: f32) {
    trace!("Game tick with delta: {delta_seconds}");

    if session.state == SessionState::Spawning {
        spawn_tetromino(session);
    }
    if session.state == SessionState::Terminated {
        return;
    }

    let game_state = &mut session.game_state;
    game_state.drop_timer += delta_seconds;
    if game_state.drop_timer > session.gravity_interval {
        game_state.drop_timer = 0.0;
        gravity_system(session);
    }
}

fn handle_piece_lock(session: &mut Session, tetromino: &Tetromino) {
    debug!(
        "Locking {:?} at ({}, {})",
        tetromino.tetromino_type, tetromino.position.x, tetromino.position.y
    );

    let lines_cleared = lock_and_clear(&mut session.board, tetromino);
    session.game_state.pieces_locked += 1;

    if lines_cleared > 0 {
        session
            .game_state
            .update_score(lines_cleared, session.line_clear_bonus);
        info!(
            "Cleared {} lines (+{}), score {}",
            lines_cleared,
            score_for(lines_cleared, session.line_clear_bonus),
            session.game_state.score
        );
    }

    session.state = SessionState::Spawning;
    spawn_tetromino(session);
}
