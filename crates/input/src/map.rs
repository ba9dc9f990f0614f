//! Key mapping from terminal events to simulation keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to a simulation key.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::ToggleRun),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Clear),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Key::Step),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Randomize),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
