//! Input module - keyboard handling for game controls
//!
//! Device-key decoding stays here; the core only ever sees `GameCommand`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameCommand;

/// Map a key event to a game command
pub fn map_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        KeyCode::Left => Some(GameCommand::MoveLeft),
        KeyCode::Right => Some(GameCommand::MoveRight),
        KeyCode::Down => Some(GameCommand::SoftDrop),
        KeyCode::Up => Some(GameCommand::Rotate),
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameCommand::Hold),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Restart),
        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
