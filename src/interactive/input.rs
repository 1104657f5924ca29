//! Keyboard input for the TUI
//!
//! Decouples the app state machine from crossterm so it can be driven in
//! tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    /// Request another word
    Tab,
    /// Ctrl-N
    NewGame,
    /// Esc or Ctrl-C
    Quit,
}

impl KeyInput {
    /// Convert a crossterm key event
    #[must_use]
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char('c') if ctrl => Some(Self::Quit),
            KeyCode::Char('n') if ctrl => Some(Self::NewGame),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Self::Char(c)),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Tab => Some(Self::Tab),
            KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}
