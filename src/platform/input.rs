//! Keyboard mapping
//!
//! Hosts forward raw key names (as reported by `KeyboardEvent.key`); this
//! module turns them into the two game actions.

/// Game actions driven by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Held to fly upward
    Jump,
    /// Starts a new session after game over
    Reset,
}

/// Whether a key went down or came back up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

impl Action {
    /// Map a key name to an action. Letter keys are case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | " " => Some(Action::Jump),
            _ if key.eq_ignore_ascii_case("w") => Some(Action::Jump),
            _ if key.eq_ignore_ascii_case("r") => Some(Action::Reset),
            _ => None,
        }
    }
}
