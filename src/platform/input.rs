//! Keyboard code mapping
//!
//! Input sources report DOM-style `KeyboardEvent.code` strings; only three of
//! them mean anything to the game.

use crate::sim::Key;

/// Map a key code to a game key, `None` for keys the game ignores
pub fn key_from_code(code: &str) -> Option<Key> {
    match code {
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        "Space" => Some(Key::Jump),
        _ => None,
    }
}
