//! The top-level loop: splash once, then play and failure screens until the
//! player quits.

use crate::backend::Backend;
use crate::canvas::Canvas;
use crate::consts::{FRAME, PROGRESS_BAR_LEN, SPLASH_HOLD, SPLASH_SECS};
use crate::game::{GameState, Phase};
use crate::render::{draw_failure, draw_play, draw_splash};
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};

/// Runs `game` to completion. Returns once the game reaches
/// [`Phase::Terminated`]; tearing the terminal down is the caller's job.
pub fn run<B: Backend, R: Rng>(backend: &mut B, game: &mut GameState, rng: &mut R) -> io::Result<()> {
    let mut canvas = Canvas::new(game.width, game.height);

    loop {
        match game.phase {
            Phase::Splash => {
                splash(backend, &mut canvas)?;
                game.start();
            }
            Phase::Playing => {
                let frame_start = Instant::now();
                let key = backend.poll_key()?;
                if game.tick(key, rng) != Phase::Playing {
                    continue;
                }
                draw_play(&mut canvas, game);
                backend.present(&canvas)?;
                game.advance_frame();

                // Frame pacing
                let elapsed = frame_start.elapsed();
                if elapsed < FRAME {
                    backend.sleep(FRAME - elapsed);
                }
            }
            Phase::Dead => {
                draw_failure(&mut canvas, game);
                backend.present(&canvas)?;
                let key = backend.wait_key()?;
                game.acknowledge(key, rng);
            }
            Phase::Terminated => return Ok(()),
        }
    }
}

/// Title screen with a progress bar that fills over a fixed time. Input is
/// not read until it is done.
fn splash<B: Backend>(backend: &mut B, canvas: &mut Canvas) -> io::Result<()> {
    let step = Duration::from_secs_f64(SPLASH_SECS / PROGRESS_BAR_LEN as f64);

    draw_splash(canvas, 0);
    backend.present(canvas)?;
    for filled in 1..=PROGRESS_BAR_LEN {
        backend.sleep(step);
        draw_splash(canvas, filled);
        backend.present(canvas)?;
    }
    backend.sleep(SPLASH_HOLD);
    Ok(())
}
