//! Polled keyboard state
//!
//! Whatever windowing layer is in use feeds key presses and releases in by
//! name; the frame driver polls a [`TickInput`] snapshot once per frame.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Restart,
}

impl Key {
    /// Map a key name (`w`, `ArrowLeft`, `Enter`, ...) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" | "arrowup" | "up" => Some(Key::Up),
            "s" | "arrowdown" | "down" => Some(Key::Down),
            "a" | "arrowleft" | "left" => Some(Key::Left),
            "d" | "arrowright" | "right" => Some(Key::Right),
            "r" | "enter" | "return" => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Held directions plus a pending restart request
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: TickInput,
    restart_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.held.up = true,
            Key::Down => self.held.down = true,
            Key::Left => self.held.left = true,
            Key::Right => self.held.right = true,
            Key::Restart => self.restart_requested = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.held.up = false,
            Key::Down => self.held.down = false,
            Key::Left => self.held.left = false,
            Key::Right => self.held.right = false,
            // Restart fires on press only
            Key::Restart => {}
        }
    }

    /// Press or release by key name; unknown names are ignored
    pub fn key_event(&mut self, name: &str, pressed: bool) {
        match Key::from_name(name) {
            Some(key) if pressed => self.key_down(key),
            Some(key) => self.key_up(key),
            None => log::trace!("Ignoring key {name:?}"),
        }
    }

    /// Current directional snapshot
    pub fn poll(&self) -> TickInput {
        self.held
    }

    pub fn restart_pending(&self) -> bool {
        self.restart_requested
    }

    /// Consume the one-shot restart request
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    /// Release every held key (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("W"), Some(Key::Up));
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("Enter"), Some(Key::Restart));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_hold_and_release() {
        let mut input = InputState::new();
        input.key_event("d", true);
        input.key_event("w", true);
        let snap = input.poll();
        assert!(snap.right && snap.up && !snap.left && !snap.down);

        input.key_event("d", false);
        assert!(!input.poll().right);
        assert!(input.poll().up);
    }

    #[test]
    fn test_restart_is_one_shot() {
        let mut input = InputState::new();
        input.key_down(Key::Restart);
        input.key_up(Key::Restart);
        assert!(input.restart_pending());
        assert!(input.take_restart());
        assert!(!input.take_restart());
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Restart);
        input.clear();
        assert!(input.poll().is_idle());
        assert!(!input.restart_pending());
    }
}
