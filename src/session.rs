//! Session runtime.
//!
//! Bridges blocking terminal input with the single-threaded game loop. A plain
//! thread blocks on `crossterm::event::read` and forwards events over a channel;
//! the loop selects between that channel and a fixed frame interval, feeding the
//! elapsed time into the countdown. Nothing in the game itself ever blocks.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::app::App;
use crate::core::RandomSource;
use crate::types::FRAME_MS;

/// Start the input thread. The channel closes when reading fails.
pub fn spawn_input_thread() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(err) => {
                tracing::warn!(%err, "terminal input failed");
                break;
            }
        }
    });
    rx
}

/// Run the game until the player quits or the input channel closes.
///
/// `draw` is called once up front and after every frame or input event.
pub async fn run_session<R, F>(
    app: &mut App<R>,
    mut events: mpsc::UnboundedReceiver<Event>,
    mut draw: F,
) -> Result<()>
where
    R: RandomSource,
    F: FnMut(&App<R>) -> Result<()>,
{
    let mut frames = time::interval(Duration::from_millis(u64::from(FRAME_MS)));
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    draw(app)?;
    loop {
        tokio::select! {
            _ = frames.tick() => {
                // Whole milliseconds only; the remainder carries into the next frame.
                let elapsed_ms = last.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
                last += Duration::from_millis(u64::from(elapsed_ms));
                app.tick(elapsed_ms);
            }
            event = events.recv() => match event {
                Some(Event::Key(key)) => app.handle_key(key),
                Some(_) => {}
                None => {
                    tracing::debug!("input channel closed");
                    break;
                }
            },
        }

        if app.should_quit() {
            break;
        }
        draw(app)?;
    }

    Ok(())
}
