//! Held-key flags
//!
//! Key events arrive between frames. They only flip these flags (plus the
//! immediate jump attempt in the session); the frame update reads them.

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Jump while playing, confirm on the end-of-round screen
    Jump,
}

const KEY_COUNT: usize = 3;

impl Key {
    const fn index(self) -> usize {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Jump => 2,
        }
    }
}

/// Which keys are currently down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    down: [bool; KEY_COUNT],
}

impl HeldKeys {
    /// Set a key's state; returns true if it was not already down (a press edge)
    pub fn press(&mut self, key: Key) -> bool {
        let was_down = self.down[key.index()];
        self.down[key.index()] = true;
        !was_down
    }

    pub fn release(&mut self, key: Key) {
        self.down[key.index()] = false;
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    pub fn clear(&mut self) {
        self.down = [false; KEY_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_and_repeat() {
        let mut keys = HeldKeys::default();
        assert!(keys.press(Key::Jump));
        // Auto-repeat while held is not an edge
        assert!(!keys.press(Key::Jump));
        assert!(keys.is_down(Key::Jump));
        keys.release(Key::Jump);
        assert!(!keys.is_down(Key::Jump));
        assert!(keys.press(Key::Jump));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut keys = HeldKeys::default();
        keys.press(Key::Left);
        keys.press(Key::Right);
        keys.release(Key::Left);
        assert!(!keys.is_down(Key::Left));
        assert!(keys.is_down(Key::Right));
        assert!(!keys.is_down(Key::Jump));
        keys.clear();
        assert_eq!(keys, HeldKeys::default());
    }
}
