//! Scrolling pipe obstacles.

use crate::consts::{OPENING_MIN, OPENING_SPAN, PIPE_STAGGER};
use rand::Rng;

/// A vertical pipe with a single opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Column of the pipe's center. May sit off either edge of the field.
    pub center: i32,
    /// Vertical center of the opening as a fraction of the field height.
    pub opening: f64,
}

impl Pipe {
    /// Scrolls the pipe one column left. Once the pipe has fully left the
    /// field it reappears just past the right edge with a new opening.
    ///
    /// Returns `true` when the pipe was recycled.
    pub fn advance<R: Rng>(&mut self, width: i32, radius: i32, rng: &mut R) -> bool {
        self.center -= 1;
        if self.center + radius < 0 {
            self.center = width + radius;
            self.opening = random_opening(rng);
            return true;
        }
        false
    }
}

/// A fresh opening fraction in `[0.25, 0.75)`.
pub fn random_opening<R: Rng>(rng: &mut R) -> f64 {
    OPENING_MIN + rng.gen_range(0.0..OPENING_SPAN)
}

/// One pipe per stagger entry, all starting off-screen to the right.
pub fn initial_pipes<R: Rng>(width: i32, rng: &mut R) -> Vec<Pipe> {
    PIPE_STAGGER
        .iter()
        .map(|stagger| Pipe {
            center: (stagger * (width - 1) as f64) as i32,
            opening: random_opening(rng),
        })
        .collect()
}
