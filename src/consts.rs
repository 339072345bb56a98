//! Compiled tuning constants. There is no runtime configuration.

use std::time::Duration;

// ── Physics ─────────────────────────────────────────────────────────────────

/// Gravitational acceleration in rows per frame squared (positive = down).
pub const GRAVITY: f64 = 0.05;

/// Vertical velocity right after a boost, in rows per frame.
pub const INITIAL_VELOCITY: f64 = -0.5;

// ── Field geometry ──────────────────────────────────────────────────────────

pub const NUM_ROWS: i32 = 24;
pub const NUM_COLS: i32 = 80;

/// Half-width of a pipe body; the pipe spans `center ± PIPE_RADIUS`.
pub const PIPE_RADIUS: i32 = 3;

/// Height of the opening in each pipe, in rows.
pub const OPENING_WIDTH: i32 = 7;

/// The bird never leaves this column.
pub const BIRD_COL: i32 = 10;

/// Opening centers are drawn from `[OPENING_MIN, OPENING_MIN + OPENING_SPAN)`.
pub const OPENING_MIN: f64 = 0.25;
pub const OPENING_SPAN: f64 = 0.5;

/// Initial pipe centers as multiples of `width - 1`. One entry per pipe.
pub const PIPE_STAGGER: [f64; 2] = [1.2, 1.75];

// ── Timing ──────────────────────────────────────────────────────────────────

pub const TARGET_FPS: u32 = 24;

/// Length of one play frame.
pub const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);

/// Time the splash progress bar takes to fill.
pub const SPLASH_SECS: f64 = 3.0;

/// Pause after the progress bar is full.
pub const SPLASH_HOLD: Duration = Duration::from_millis(500);

// ── Layout & glyphs ─────────────────────────────────────────────────────────

pub const PROGRESS_BAR_LEN: i32 = 76;
pub const PROGRESS_BAR_ROW: i32 = 22;

/// The HUD ends near this column; it shifts left as the scores grow.
pub const SCORE_START_COL: i32 = 62;

/// HUD layout stops widening past this many digits per number.
pub const MAX_HUD_DIGITS: i32 = 3;

pub const FLOOR_GLYPH: char = '/';
pub const FLOOR_SPACING: i32 = 2;

pub const PIPE_GLYPH: char = '|';
pub const CAP_GLYPH: char = '=';

/// Wings alternate every half of this many frames while climbing.
pub const FLAP_PERIOD: u64 = 6;
