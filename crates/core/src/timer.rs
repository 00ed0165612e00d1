//! Round countdown.
//!
//! The timer is driven by the caller feeding elapsed milliseconds into
//! [`RoundTimer::advance`], the same fixed-timestep approach the game loop uses
//! for everything else. Whole seconds are reported to a [`CountdownObserver`];
//! when the count reaches zero the timer stops itself and reports expiry once.
//!
//! Each `start` mints a fresh [`CountdownId`]. Notifications carry the id, and a
//! stopped or superseded countdown is simply gone from the timer, so nothing can
//! be reported for it after `stop` returns.

use crate::types::COUNTDOWN_TICK_MS;

/// Identifies one countdown started by [`RoundTimer::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountdownId(u64);

impl CountdownId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Receives countdown notifications.
pub trait CountdownObserver {
    /// A second elapsed; `remaining` is the new value.
    fn on_tick(&mut self, id: CountdownId, remaining: u32);
    /// The countdown reached zero. Called exactly once per countdown.
    fn on_expired(&mut self, id: CountdownId);
}

#[derive(Debug, Clone, Copy)]
struct Countdown {
    id: CountdownId,
    remaining: u32,
    /// Milliseconds accumulated toward the next tick.
    carry_ms: u32,
}

/// Single active countdown with one-second resolution.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    interval_ms: u32,
    generation: u64,
    active: Option<Countdown>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::with_interval_ms(COUNTDOWN_TICK_MS)
    }

    /// Timer with a custom tick length. Zero is bumped to 1ms.
    pub fn with_interval_ms(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            generation: 0,
            active: None,
        }
    }

    /// Start counting down from `limit`, replacing any running countdown.
    pub fn start(&mut self, limit: u32) -> CountdownId {
        self.generation = self.generation.wrapping_add(1);
        let id = CountdownId(self.generation);
        self.active = Some(Countdown {
            id,
            remaining: limit,
            carry_ms: 0,
        });
        id
    }

    /// Cancel the running countdown. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the running countdown.
    pub fn current(&self) -> Option<CountdownId> {
        self.active.map(|c| c.id)
    }

    /// Seconds left on the running countdown.
    pub fn remaining(&self) -> Option<u32> {
        self.active.map(|c| c.remaining)
    }

    /// Milliseconds until the next tick of the running countdown.
    pub fn until_next_tick_ms(&self) -> Option<u32> {
        self.active
            .map(|c| self.interval_ms.saturating_sub(c.carry_ms))
    }

    /// Feed elapsed time. Emits one `on_tick` per completed second and, on
    /// reaching zero, stops and emits `on_expired`.
    ///
    /// A countdown started with a limit of zero expires on the first call.
    pub fn advance(&mut self, elapsed_ms: u32, observer: &mut impl CountdownObserver) {
        let Some(countdown) = self.active.as_mut() else {
            return;
        };
        let id = countdown.id;
        countdown.carry_ms = countdown.carry_ms.saturating_add(elapsed_ms);

        let mut expired = countdown.remaining == 0;
        while !expired && countdown.carry_ms >= self.interval_ms {
            countdown.carry_ms -= self.interval_ms;
            countdown.remaining -= 1;
            observer.on_tick(id, countdown.remaining);
            expired = countdown.remaining == 0;
        }

        if expired {
            self.active = None;
            observer.on_expired(id);
        }
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}
