#![warn(clippy::all, clippy::pedantic)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A point-in-time player request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}

/// Map a terminal key event to a command. Only presses count; repeats and
/// releases are dropped so held keys do not stream moves.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::Rotate),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        _ => None,
    }
}
