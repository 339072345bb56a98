//! Game state and the transitions between splash, play and failure.

use crate::collision::crashed;
use crate::consts::{GRAVITY, INITIAL_VELOCITY, MAX_HUD_DIGITS, PIPE_RADIUS};
use crate::input::Key;
use crate::physics::Bird;
use crate::pipe::{Pipe, initial_pipes};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Playing,
    Dead,
    Terminated,
}

/// Everything that changes while the game runs. Owned by the loop; the
/// renderer and collision checks only ever borrow it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub best_score: u32,
    /// Animation counter only. Physics never reads it.
    pub frame: u64,
    pub phase: Phase,
}

impl GameState {
    pub fn new<R: Rng>(width: i32, height: i32, rng: &mut R) -> Self {
        Self {
            width,
            height,
            bird: Bird::new((height / 2) as f64),
            pipes: initial_pipes(width, rng),
            score: 0,
            best_score: 0,
            frame: 0,
            phase: Phase::Splash,
        }
    }

    /// Leaves the splash screen. Has no effect in any other phase.
    pub fn start(&mut self) {
        if self.phase == Phase::Splash {
            self.phase = Phase::Playing;
        }
    }

    /// Fresh bird and pipes. Scores are left alone.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.bird = Bird::new((self.height / 2) as f64);
        self.pipes = initial_pipes(self.width, rng);
    }

    /// One play frame: apply `key` (or gravity), scroll the pipes, then
    /// check for a crash.
    pub fn tick<R: Rng>(&mut self, key: Option<Key>, rng: &mut R) -> Phase {
        if self.phase != Phase::Playing {
            return self.phase;
        }

        match key {
            Some(Key::Quit) => {
                log::info!("quit while playing (score {})", self.score);
                self.phase = Phase::Terminated;
                return self.phase;
            }
            Some(Key::Boost) => self.bird.boost(GRAVITY, INITIAL_VELOCITY),
            Some(Key::Other) | None => self.bird.fall(),
        }

        for pipe in &mut self.pipes {
            if pipe.advance(self.width, PIPE_RADIUS, rng) {
                self.score += 1;
                log::debug!(
                    "pipe recycled, opening {:.3}, score {}",
                    pipe.opening,
                    self.score
                );
            }
        }

        if crashed(&self.bird, &self.pipes, self.height) {
            log::info!("crashed: score {} best {}", self.score, self.best_score);
            self.phase = Phase::Dead;
        }
        self.phase
    }

    /// Handles the single key read on the failure screen.
    pub fn acknowledge<R: Rng>(&mut self, key: Key, rng: &mut R) -> Phase {
        if self.phase != Phase::Dead {
            return self.phase;
        }
        if key == Key::Quit {
            log::info!("quit from failure screen");
            self.phase = Phase::Terminated;
            return self.phase;
        }
        self.best_score = self.best_score.max(self.score);
        self.score = 0;
        self.reset(rng);
        log::info!("restart, best {}", self.best_score);
        self.phase = Phase::Playing;
        self.phase
    }

    pub fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Digits of the current score as the HUD lays it out.
    pub fn score_digits(&self) -> i32 {
        hud_digits(self.score)
    }

    pub fn best_digits(&self) -> i32 {
        hud_digits(self.best_score)
    }
}

fn hud_digits(n: u32) -> i32 {
    (n.to_string().len() as i32).min(MAX_HUD_DIGITS)
}
