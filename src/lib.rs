//! Flappy Bird in an 80x24 terminal.
//!
//! The bird flies along a parabola between two scrolling pipes; the Up
//! arrow restarts the parabola from wherever the bird is. The game logic
//! is plain data and pure functions, and [`app::run`] drives it over any
//! [`Backend`], which is how the tests play it without a terminal.

pub mod app;
pub mod backend;
pub mod canvas;
pub mod collision;
pub mod consts;
pub mod game;
pub mod input;
pub mod physics;
pub mod pipe;
pub mod render;

pub use backend::{Backend, TermBackend};
pub use canvas::Canvas;
pub use game::{GameState, Phase};
pub use input::Key;
