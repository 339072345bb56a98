//! The terminal the game talks to: a screen, a keyboard and a clock.

use crate::canvas::Canvas;
use crate::input::Key;
use crossterm::{cursor, event, execute, terminal};
use std::io::{self, Stdout, stdout};
use std::time::Duration;

pub trait Backend {
    /// Shows a finished frame.
    fn present(&mut self, canvas: &Canvas) -> io::Result<()>;

    /// Next pending key, or `None` right away if nothing is waiting.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;

    /// Blocks until a key is pressed.
    fn wait_key(&mut self) -> io::Result<Key>;

    fn sleep(&mut self, dur: Duration);
}

/// Crossterm-backed raw-mode terminal on the alternate screen.
pub struct TermBackend {
    out: Stdout,
}

impl TermBackend {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
        )?;
        Ok(Self { out })
    }

    /// Restores the terminal. Called once, on the way out.
    pub fn leave(mut self) -> io::Result<()> {
        execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    }
}

impl Backend for TermBackend {
    fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        canvas.render(&mut self.out)
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            if let Some(key) = Key::from_event(event::read()?) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = Key::from_event(event::read()?) {
                return Ok(key);
            }
        }
    }

    fn sleep(&mut self, dur: Duration) {
        std::thread::sleep(dur);
    }
}
