//! Crash detection against pipes and the floor/ceiling.

use crate::consts::{BIRD_COL, GRAVITY, INITIAL_VELOCITY, OPENING_WIDTH, PIPE_RADIUS};
use crate::physics::{Bird, Edge, bird_row, opening_bound};
use crate::pipe::Pipe;

/// True if the bird is level with the pipe (give or take one column) and
/// not strictly inside its opening.
pub fn hits_pipe(bird: &Bird, pipe: &Pipe, display_height: i32) -> bool {
    if BIRD_COL < pipe.center - PIPE_RADIUS - 1 || BIRD_COL > pipe.center + PIPE_RADIUS + 1 {
        return false;
    }
    let row = bird_row(bird, GRAVITY, INITIAL_VELOCITY);
    let top = opening_bound(pipe, display_height, OPENING_WIDTH, Edge::Top);
    let bottom = opening_bound(pipe, display_height, OPENING_WIDTH, Edge::Bottom);
    !(top + 1..=bottom - 1).contains(&row)
}

/// True if the bird touches the ceiling or the floor row.
pub fn hits_bounds(bird: &Bird, display_height: i32) -> bool {
    let row = bird_row(bird, GRAVITY, INITIAL_VELOCITY);
    row <= 0 || row >= display_height - 1
}

/// Any crash at all this frame.
pub fn crashed(bird: &Bird, pipes: &[Pipe], display_height: i32) -> bool {
    hits_bounds(bird, display_height) || pipes.iter().any(|p| hits_pipe(bird, p, display_height))
}
