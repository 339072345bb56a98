//! Drawing. Every function reads the game state and writes only to the
//! canvas.

use crate::canvas::Canvas;
use crate::consts::{
    BIRD_COL, CAP_GLYPH, FLAP_PERIOD, FLOOR_GLYPH, FLOOR_SPACING, GRAVITY, INITIAL_VELOCITY,
    NUM_COLS, NUM_ROWS, OPENING_WIDTH, PIPE_GLYPH, PIPE_RADIUS, PROGRESS_BAR_LEN,
    PROGRESS_BAR_ROW, SCORE_START_COL,
};
use crate::game::GameState;
use crate::physics::{Edge, bird_row, is_descending, opening_bound};
use crate::pipe::Pipe;

// ── Play field ──────────────────────────────────────────────────────────────

/// A full play frame: floor and ceiling, pipes, bird, then the HUD on top.
pub fn draw_play(canvas: &mut Canvas, game: &GameState) {
    canvas.clear();
    draw_floor_and_ceiling(canvas, game);
    for pipe in &game.pipes {
        draw_pipe(canvas, pipe);
    }
    draw_bird(canvas, game);
    draw_hud(canvas, game);
}

/// Column where the HUD text starts. Shifts left as the scores gain digits.
fn hud_col(canvas: &Canvas, game: &GameState) -> i32 {
    canvas.width() - (NUM_COLS - SCORE_START_COL) - game.score_digits() - game.best_digits()
}

/// Dashed floor and ceiling scrolling one cell per frame. The ceiling stops
/// short of the HUD.
pub fn draw_floor_and_ceiling(canvas: &mut Canvas, game: &GameState) {
    let floor_row = canvas.height() - 1;
    let ceiling_end = hud_col(canvas, game);
    let start = (game.frame % FLOOR_SPACING as u64) as i32;
    for col in (start..canvas.width() - 1).step_by(FLOOR_SPACING as usize) {
        if col < ceiling_end {
            canvas.set(0, col, FLOOR_GLYPH);
        }
        canvas.set(floor_row, col, FLOOR_GLYPH);
    }
}

/// Body columns at both pipe edges, with a cap where each half ends.
pub fn draw_pipe(canvas: &mut Canvas, pipe: &Pipe) {
    let ceiling_row = 0;
    let floor_row = canvas.height() - 1;
    let top = opening_bound(pipe, canvas.height(), OPENING_WIDTH, Edge::Top);
    let bottom = opening_bound(pipe, canvas.height(), OPENING_WIDTH, Edge::Bottom);

    for row in ceiling_row + 1..top {
        pipe_body(canvas, pipe, row);
    }
    pipe_cap(canvas, pipe, top.max(ceiling_row + 1));

    for row in bottom + 1..floor_row {
        pipe_body(canvas, pipe, row);
    }
    pipe_cap(canvas, pipe, bottom.min(floor_row - 1));
}

// The rightmost display column is never drawn on.
fn in_field(canvas: &Canvas, col: i32) -> bool {
    col >= 0 && col < canvas.width() - 1
}

fn pipe_body(canvas: &mut Canvas, pipe: &Pipe, row: i32) {
    for col in [pipe.center - PIPE_RADIUS, pipe.center + PIPE_RADIUS] {
        if in_field(canvas, col) {
            canvas.set(row, col, PIPE_GLYPH);
        }
    }
}

fn pipe_cap(canvas: &mut Canvas, pipe: &Pipe, row: i32) {
    for col in pipe.center - PIPE_RADIUS..=pipe.center + PIPE_RADIUS {
        if in_field(canvas, col) {
            canvas.set(row, col, CAP_GLYPH);
        }
    }
}

/// The five glyphs of the bird as `(row, col, glyph)`. Wings flap while
/// climbing and fold back into a dive once the bird starts to fall.
pub fn bird_sprite(game: &GameState) -> [(i32, i32, char); 5] {
    let h = bird_row(&game.bird, GRAVITY, INITIAL_VELOCITY);
    let c = BIRD_COL;

    if is_descending(&game.bird, GRAVITY, INITIAL_VELOCITY) {
        return [
            (h - 1, c - 2, '\\'),
            (h, c - 1, '\\'),
            (h, c, '0'),
            (h, c + 1, '/'),
            (h - 1, c + 2, '/'),
        ];
    }

    if game.frame % FLAP_PERIOD < FLAP_PERIOD / 2 {
        [
            (h + 1, c - 2, '/'),
            (h, c - 1, '/'),
            (h, c, '0'),
            (h, c + 1, '\\'),
            (h + 1, c + 2, '\\'),
        ]
    } else {
        [
            (h - 1, c - 2, '\\'),
            (h, c - 1, '\\'),
            (h, c, '0'),
            (h, c + 1, '/'),
            (h - 1, c + 2, '/'),
        ]
    }
}

pub fn draw_bird(canvas: &mut Canvas, game: &GameState) {
    for (row, col, glyph) in bird_sprite(game) {
        canvas.set(row, col, glyph);
    }
}

pub fn draw_hud(canvas: &mut Canvas, game: &GameState) {
    let text = format!(" Score: {}  Best: {}", game.score, game.best_score);
    canvas.put(0, hud_col(canvas, game), &text);
}

// ── Splash ──────────────────────────────────────────────────────────────────

#[rustfmt::skip]
const TITLE: [&str; 5] = [
    r" ___ _                       ___ _        _ ",
    r"| __| |__ _ _ __ _ __ _  _  | _ |_)_ _ __| |",
    r"| _|| / _` | '_ \ '_ \ || | | _ \ | '_/ _` |",
    r"|_| |_\__,_| .__/ .__/\_, | |___/_|_| \__,_|",
    r"           |_|  |_|   |__/                  ",
];

/// Title art plus a progress bar with `filled` cells done.
pub fn draw_splash(canvas: &mut Canvas, filled: i32) {
    canvas.clear();
    let (w, h) = (canvas.width(), canvas.height());

    let r = h / 2 - 6;
    let c = w / 2 - 22;
    for (i, line) in TITLE.iter().enumerate() {
        canvas.put(r + i as i32, c, line);
    }
    canvas.put(h / 2 + 1, w / 2 - 10, "Press <up> to flap!");

    let bar_row = h - (NUM_ROWS - PROGRESS_BAR_ROW);
    let bar_start = w / 2 - PROGRESS_BAR_LEN / 2;
    canvas.set(bar_row, bar_start - 1, '[');
    canvas.set(bar_row, w / 2 + PROGRESS_BAR_LEN / 2, ']');
    for i in 0..filled.clamp(0, PROGRESS_BAR_LEN) {
        canvas.set(bar_row, bar_start + i, '=');
    }
}

// ── Failure ─────────────────────────────────────────────────────────────────

const DEATH_MESSAGE: &str = "Flappy died :-(. <Enter> to flap, 'q' to quit.";

/// The crash frame, frozen, with the restart prompt boxed over it.
pub fn draw_failure(canvas: &mut Canvas, game: &GameState) {
    draw_play(canvas, game);
    let (w, h) = (canvas.width(), canvas.height());

    let row = h / 2 - 1;
    let col = w / 2 - 22;
    let box_w = DEATH_MESSAGE.len() as i32 + 2;
    let blank = " ".repeat(box_w as usize);
    for r in row - 1..=row + 2 {
        canvas.put(r, col - 1, &blank);
    }
    canvas.put(row, col, DEATH_MESSAGE);

    let best = game.best_score.max(game.score);
    let scores = format!("Score: {}  Best: {}", game.score, best);
    canvas.put(row + 1, w / 2 - scores.len() as i32 / 2, &scores);
}
