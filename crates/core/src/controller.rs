//! Round controller - the round lifecycle state machine
//!
//! Ties together difficulty, the countdown, the RNG and score tracking. All
//! mutable game data lives in one [`GameState`] owned by the controller; the
//! outside world sees it only through accessors and [`Presenter`] callbacks.
//!
//! ```text
//! Idle ──start_game──▶ RoundActive ──submit / expiry──▶ RoundResolved
//!   ▲                      ▲                                  │
//!   │                      └────────── advance_round ─────────┘
//!   └──────────────────── return_to_menu (any phase)
//! ```
//!
//! `reset_game` restarts at round 1 from any phase.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::config::GameConfig;
use crate::difficulty::params_for_round;
use crate::rng::{RandomSource, SimpleRng};
use crate::score::ScoreTracker;
use crate::store::BestScoreStore;
use crate::timer::{CountdownId, CountdownObserver, RoundTimer};
use crate::types::{HudSnapshot, OutcomeEvent, Phase, RoundOutcome};

/// Presentation boundary. The controller never draws or plays sounds itself.
pub trait Presenter {
    /// Show `count` cars for the new round.
    fn display_item_count(&mut self, count: u32);
    /// A submission was judged, rejected, or the round timed out.
    fn show_outcome(&mut self, event: OutcomeEvent);
    /// Remove any outcome message (new round).
    fn clear_outcome(&mut self);
    /// Round, score, best or time left changed.
    fn update_hud(&mut self, hud: HudSnapshot);
}

/// Why a submitted answer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAnswer {
    #[error("answer is empty")]
    Empty,
    #[error("answer is negative")]
    Negative,
    #[error("answer is not a whole number")]
    NotInteger,
}

/// Parse a typed answer into a non-negative integer.
///
/// Surrounding whitespace and a leading `+` are accepted. Digit strings too
/// long for `u64` are still valid answers and saturate, so they judge as wrong
/// rather than malformed.
pub fn parse_answer(raw: &str) -> Result<u64, InvalidAnswer> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidAnswer::Empty);
    }
    match trimmed.parse::<u64>() {
        Ok(v) => Ok(v),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        Err(_) => {
            let rest = trimmed.strip_prefix('-').unwrap_or("");
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                Err(InvalidAnswer::Negative)
            } else {
                Err(InvalidAnswer::NotInteger)
            }
        }
    }
}

/// Result of [`RoundController::submit_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// No active, unresolved round; nothing changed.
    Ignored,
    /// Malformed input; the round stays active.
    Rejected(InvalidAnswer),
    /// The round was resolved.
    Resolved(RoundOutcome),
}

/// Per-session round data. Only the controller mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    phase: Phase,
    round: u32,
    current_item_count: u32,
    max_items_for_round: u32,
    time_limit_for_round: u32,
    time_left: u32,
    checked: bool,
    countdown: Option<CountdownId>,
}

impl GameState {
    fn new(config: &GameConfig) -> Self {
        let params = params_for_round(1, config);
        Self {
            phase: Phase::Idle,
            round: 1,
            current_item_count: 0,
            max_items_for_round: params.max_items,
            time_limit_for_round: params.time_limit,
            time_left: params.time_limit,
            checked: false,
            countdown: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// The hidden answer for the current round.
    pub fn current_item_count(&self) -> u32 {
        self.current_item_count
    }

    pub fn max_items_for_round(&self) -> u32 {
        self.max_items_for_round
    }

    pub fn time_limit_for_round(&self) -> u32 {
        self.time_limit_for_round
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Whether the current round has been resolved.
    pub fn checked(&self) -> bool {
        self.checked
    }
}

/// Forwards countdown notifications into game state during `tick`.
struct CountdownBridge<'a, P: Presenter> {
    expected: Option<CountdownId>,
    time_left: &'a mut u32,
    hud: HudSnapshot,
    presenter: &'a mut P,
    expired: bool,
}

impl<P: Presenter> CountdownObserver for CountdownBridge<'_, P> {
    fn on_tick(&mut self, id: CountdownId, remaining: u32) {
        if self.expected != Some(id) {
            return;
        }
        *self.time_left = remaining;
        self.presenter.update_hud(HudSnapshot {
            time_left: remaining,
            ..self.hud
        });
    }

    fn on_expired(&mut self, id: CountdownId) {
        if self.expected == Some(id) {
            self.expired = true;
        }
    }
}

/// Orchestrates the round lifecycle.
pub struct RoundController<P: Presenter, R: RandomSource = SimpleRng> {
    config: GameConfig,
    state: GameState,
    scores: ScoreTracker,
    timer: RoundTimer,
    rng: R,
    presenter: P,
}

impl<P: Presenter, R: RandomSource> RoundController<P, R> {
    /// Create a controller in the `Idle` phase with the best score loaded from
    /// `store`. Emits the initial HUD.
    pub fn new(config: GameConfig, store: Box<dyn BestScoreStore>, rng: R, presenter: P) -> Self {
        Self::with_timer(config, store, rng, presenter, RoundTimer::new())
    }

    /// Like [`RoundController::new`] with a caller-supplied timer.
    pub fn with_timer(
        config: GameConfig,
        store: Box<dyn BestScoreStore>,
        rng: R,
        presenter: P,
        timer: RoundTimer,
    ) -> Self {
        let mut controller = Self {
            state: GameState::new(&config),
            config,
            scores: ScoreTracker::load(store),
            timer,
            rng,
            presenter,
        };
        controller.emit_hud();
        controller
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn best(&self) -> u32 {
        self.scores.best()
    }

    pub fn time_left(&self) -> u32 {
        self.state.time_left
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Answers are accepted only while a round is active and unresolved.
    pub fn can_submit(&self) -> bool {
        self.state.phase == Phase::RoundActive && !self.state.checked
    }

    /// Moving on is possible only after the round is resolved.
    pub fn can_advance(&self) -> bool {
        self.state.phase == Phase::RoundResolved
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            round: self.state.round,
            score: self.scores.score(),
            best: self.scores.best(),
            time_left: self.state.time_left,
        }
    }

    /// Leave the menu and play from round 1.
    pub fn start_game(&mut self) {
        self.timer.stop();
        self.state.round = 1;
        self.scores.reset();
        tracing::info!(best = self.scores.best(), "game started");
        self.start_round();
    }

    /// Begin the current round: draw a count, show it, start the countdown.
    pub fn start_round(&mut self) {
        self.state.checked = false;
        self.state.phase = Phase::RoundActive;
        self.presenter.clear_outcome();

        let params = params_for_round(self.state.round, &self.config);
        self.state.max_items_for_round = params.max_items;
        self.state.time_limit_for_round = params.time_limit;
        self.state.current_item_count = self
            .rng
            .next_in_range(self.config.min_items, params.max_items);

        self.presenter
            .display_item_count(self.state.current_item_count);

        self.state.time_left = params.time_limit;
        self.state.countdown = Some(self.timer.start(params.time_limit));

        tracing::debug!(
            round = self.state.round,
            max_items = params.max_items,
            time_limit = params.time_limit,
            "round started"
        );
        self.emit_hud();
    }

    /// Judge a typed answer.
    pub fn submit_answer(&mut self, raw: &str) -> Submission {
        if !self.can_submit() {
            return Submission::Ignored;
        }

        let answer = match parse_answer(raw) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::debug!(round = self.state.round, %err, "answer rejected");
                self.presenter.show_outcome(OutcomeEvent::ValidationError);
                return Submission::Rejected(err);
            }
        };

        self.timer.stop();
        self.state.countdown = None;

        let correct = self.state.current_item_count;
        let outcome = if answer == u64::from(correct) {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Incorrect { correct }
        };

        self.scores.record_round_result(outcome.is_correct());
        if outcome.is_correct() {
            self.scores.maybe_update_best();
        }
        self.resolve(outcome);
        Submission::Resolved(outcome)
    }

    /// Handle the countdown reaching zero. Returns whether the round was
    /// resolved by this call; a round that is already resolved is left alone.
    pub fn on_timer_expired(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        self.timer.stop();
        self.state.countdown = None;
        self.state.time_left = 0;

        self.scores.record_round_result(false);
        self.resolve(RoundOutcome::TimedOut {
            correct: self.state.current_item_count,
        });
        true
    }

    /// Feed elapsed frame time into the countdown.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let hud = self.hud();
        let mut bridge = CountdownBridge {
            expected: self.state.countdown,
            time_left: &mut self.state.time_left,
            hud,
            presenter: &mut self.presenter,
            expired: false,
        };
        self.timer.advance(elapsed_ms, &mut bridge);
        let expired = bridge.expired;

        if expired {
            self.on_timer_expired();
        }
    }

    /// Move on from a resolved round. Returns false in any other phase.
    pub fn advance_round(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.state.round = self.state.round.saturating_add(1);
        self.start_round();
        true
    }

    /// Restart at round 1 with score 0. The best score is kept.
    pub fn reset_game(&mut self) {
        self.timer.stop();
        self.state.round = 1;
        self.scores.reset();
        tracing::info!("game reset");
        self.start_round();
    }

    /// Stop the countdown and go back to the menu.
    pub fn return_to_menu(&mut self) {
        self.timer.stop();
        self.state.countdown = None;
        self.state.phase = Phase::Idle;
    }

    fn resolve(&mut self, outcome: RoundOutcome) {
        self.state.checked = true;
        self.state.phase = Phase::RoundResolved;
        tracing::info!(
            round = self.state.round,
            ?outcome,
            score = self.scores.score(),
            "round resolved"
        );
        self.presenter.show_outcome(outcome.into());
        self.emit_hud();
    }

    fn emit_hud(&mut self) {
        let hud = self.hud();
        self.presenter.update_hud(hud);
    }
}
