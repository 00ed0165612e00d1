//! Terminal car counter (default binary).
//!
//! Environment:
//! - `CAR_COUNTER_*`: difficulty overrides (see `GameConfig::from_env`)
//! - `CAR_COUNTER_SEED`: fixed RNG seed
//! - `CAR_COUNTER_DATA_DIR`: where the best score is kept
//! - `CAR_COUNTER_LOG_PATH`: append logs to this file (filtered by `RUST_LOG`)

use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use car_counter::core::{GameConfig, JsonFileStore, RoundController, SimpleRng};
use car_counter::term::{FrameBuffer, GameView, ScreenState, TerminalRenderer, Viewport};
use car_counter::{run_session, spawn_input_thread, App};

fn main() -> Result<()> {
    init_tracing()?;

    let config = GameConfig::from_env_or_default();
    let seed = seed_from_env();
    let store = JsonFileStore::in_default_location();
    tracing::info!(?config, seed, store = %store.path().display(), "starting");

    let controller = RoundController::new(
        config,
        Box::new(store),
        SimpleRng::new(seed),
        ScreenState::new(),
    );
    let mut app = App::new(controller);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let events = spawn_input_thread();
    let result = rt.block_on(run_session(&mut app, events, |app| {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&app.frame_input(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)
    }));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing() -> Result<()> {
    let Ok(path) = env::var("CAR_COUNTER_LOG_PATH") else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}

fn seed_from_env() -> u32 {
    if let Some(seed) = env::var("CAR_COUNTER_SEED")
        .ok()
        .and_then(|v| v.trim().parse().ok())
    {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
