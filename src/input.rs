//! Logical keys the game reacts to.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Up arrow: give the bird a boost.
    Boost,
    /// `q`, or Ctrl-C since raw mode swallows SIGINT.
    Quit,
    /// Anything else. Only meaningful on the failure screen.
    Other,
}

impl Key {
    pub fn from_key_event(key: KeyEvent) -> Option<Key> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        Some(match key.code {
            KeyCode::Up => Key::Boost,
            KeyCode::Char('q') => Key::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
            _ => Key::Other,
        })
    }

    /// Non-key events (resize, focus, mouse) map to nothing.
    pub fn from_event(event: Event) -> Option<Key> {
        match event {
            Event::Key(key) => Key::from_key_event(key),
            _ => None,
        }
    }
}
