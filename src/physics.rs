//! Bird trajectory and pipe opening geometry. Everything here is pure.
//!
//! Rows grow downward, so a negative velocity climbs toward the ceiling.

use crate::pipe::Pipe;

/// The bird's trajectory since its last boost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Row position at the last boost.
    pub base_height: f64,
    /// Frames since the last boost.
    pub elapsed: u32,
}

impl Bird {
    /// A bird hovering at `height` with a fresh trajectory.
    pub fn new(height: f64) -> Self {
        Self {
            base_height: height,
            elapsed: 0,
        }
    }

    /// Restarts the parabola from the current height.
    pub fn boost(&mut self, gravity: f64, v0: f64) {
        self.base_height = bird_height(self, gravity, v0);
        self.elapsed = 0;
    }

    /// Lets the bird fall one more frame along its parabola.
    pub fn fall(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }
}

/// `h0 + v0·t + ½·g·t²`.
pub fn bird_height(bird: &Bird, gravity: f64, v0: f64) -> f64 {
    let t = bird.elapsed as f64;
    bird.base_height + v0 * t + 0.5 * gravity * t * t
}

/// The display row the bird occupies. Truncates like every other row
/// computation so collision and drawing agree.
pub fn bird_row(bird: &Bird, gravity: f64, v0: f64) -> i32 {
    bird_height(bird, gravity, v0) as i32
}

/// True once the instantaneous velocity points at the floor.
pub fn is_descending(bird: &Bird, gravity: f64, v0: f64) -> bool {
    gravity * bird.elapsed as f64 + v0 > 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Row of the top or bottom edge of a pipe's opening.
pub fn opening_bound(pipe: &Pipe, display_height: i32, opening_width: i32, edge: Edge) -> i32 {
    let center = pipe.opening * (display_height - 1) as f64;
    let half = (opening_width / 2) as f64;
    match edge {
        Edge::Top => (center - half) as i32,
        Edge::Bottom => (center + half) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GRAVITY, INITIAL_VELOCITY, NUM_ROWS, OPENING_WIDTH};

    fn at(elapsed: u32) -> Bird {
        Bird {
            base_height: 12.0,
            elapsed,
        }
    }

    #[test]
    fn test_height_at_zero_is_base() {
        assert_eq!(bird_height(&at(0), GRAVITY, INITIAL_VELOCITY), 12.0);
    }

    #[test]
    fn test_parabola_shape() {
        // Velocity crosses zero at t* = -v0/g = 10.
        let t_star = 10;
        for t in 0..t_star {
            let now = bird_height(&at(t), GRAVITY, INITIAL_VELOCITY);
            let next = bird_height(&at(t + 1), GRAVITY, INITIAL_VELOCITY);
            assert!(next < now, "t={t}: {next} !< {now}");
        }
        for t in t_star..t_star + 60 {
            let now = bird_height(&at(t), GRAVITY, INITIAL_VELOCITY);
            let next = bird_height(&at(t + 1), GRAVITY, INITIAL_VELOCITY);
            assert!(next >= now, "t={t}: {next} !>= {now}");
        }
    }

    #[test]
    fn test_is_descending_flips_after_apex() {
        assert!(!is_descending(&at(0), GRAVITY, INITIAL_VELOCITY));
        assert!(!is_descending(&at(9), GRAVITY, INITIAL_VELOCITY));
        assert!(is_descending(&at(11), GRAVITY, INITIAL_VELOCITY));
    }

    #[test]
    fn test_boost_keeps_current_height() {
        let mut bird = at(25);
        let before = bird_height(&bird, GRAVITY, INITIAL_VELOCITY);
        bird.boost(GRAVITY, INITIAL_VELOCITY);
        assert_eq!(bird.elapsed, 0);
        assert!((bird.base_height - before).abs() < 1e-9);
    }

    #[test]
    fn test_bird_row_truncates() {
        let bird = Bird {
            base_height: 11.9,
            elapsed: 0,
        };
        assert_eq!(bird_row(&bird, GRAVITY, INITIAL_VELOCITY), 11);
    }

    #[test]
    fn test_opening_bounds_mid_field() {
        let pipe = Pipe {
            center: 10,
            opening: 0.5,
        };
        // 0.5 * 23 = 11.5, half width 3.
        assert_eq!(opening_bound(&pipe, NUM_ROWS, OPENING_WIDTH, Edge::Top), 8);
        assert_eq!(opening_bound(&pipe, NUM_ROWS, OPENING_WIDTH, Edge::Bottom), 14);
    }
}
