use crossterm::terminal;
use flappy_term::consts::{NUM_COLS, NUM_ROWS};
use flappy_term::{GameState, TermBackend, app};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

// ── Main ────────────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Logs go to stderr; redirect it when raising RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    log::info!("starting, seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let (cols, rows) = terminal::size()?;
    if i32::from(cols) < NUM_COLS || i32::from(rows) < NUM_ROWS {
        log::warn!(
            "terminal is {cols}x{rows}, the game is drawn for {NUM_COLS}x{NUM_ROWS} and will be clipped"
        );
    }

    let mut game = GameState::new(NUM_COLS, NUM_ROWS, &mut rng);
    let mut backend = TermBackend::enter()?;
    let result = app::run(&mut backend, &mut game, &mut rng);
    let restored = backend.leave();
    result.and(restored)
}
