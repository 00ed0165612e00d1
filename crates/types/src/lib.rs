//! Core types module - shared data structures and constants
//!
//! This module defines the plain data exchanged between the round controller and
//! whatever front-end presents the game. Everything here is dependency-free so it
//! can be used by core logic, input mapping and terminal rendering alike.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MIN_ITEMS` | 3 | Smallest number of cars in any round |
//! | `DEFAULT_START_MAX_ITEMS` | 18 | Car ceiling in round 1 |
//! | `DEFAULT_MAX_ITEMS_CAP` | 60 | Car ceiling never grows past this |
//! | `DEFAULT_MAX_ITEMS_INCREMENT` | 2 | Ceiling growth per round |
//! | `DEFAULT_START_TIME_SECS` | 14 | Time limit in round 1 |
//! | `DEFAULT_MIN_TIME_SECS` | 6 | Time limit never drops below this |
//! | `DEFAULT_TIME_DECREMENT_SECS` | 1 | Time limit shrink per round |
//!
//! # Timing
//!
//! - `COUNTDOWN_TICK_MS`: 1000ms - countdown resolution
//! - `FRAME_MS`: 50ms - how often the front-end feeds elapsed time to the core
//!
//! # Examples
//!
//! ```
//! use car_counter_types::{HudSnapshot, OutcomeEvent, PlayerAction, RoundOutcome, TimeUrgency};
//!
//! let hud = HudSnapshot { round: 2, score: 1, best: 4, time_left: 3 };
//! assert_eq!(hud.urgency(), TimeUrgency::Panic);
//!
//! let event = OutcomeEvent::from(RoundOutcome::TimedOut { correct: 12 });
//! assert_eq!(event.correct_count(), Some(12));
//!
//! assert_eq!(PlayerAction::from_str("nextRound"), Some(PlayerAction::AdvanceRound));
//! ```

/// Smallest number of cars shown in any round.
pub const DEFAULT_MIN_ITEMS: u32 = 3;

/// Car ceiling for round 1.
pub const DEFAULT_START_MAX_ITEMS: u32 = 18;

/// Upper bound the car ceiling never exceeds.
pub const DEFAULT_MAX_ITEMS_CAP: u32 = 60;

/// Car ceiling growth per round.
pub const DEFAULT_MAX_ITEMS_INCREMENT: u32 = 2;

/// Time limit for round 1, in seconds.
pub const DEFAULT_START_TIME_SECS: u32 = 14;

/// Lower bound the time limit never drops below, in seconds.
pub const DEFAULT_MIN_TIME_SECS: u32 = 6;

/// Time limit shrink per round, in seconds.
pub const DEFAULT_TIME_DECREMENT_SECS: u32 = 1;

/// Countdown resolution (one tick per second).
pub const COUNTDOWN_TICK_MS: u32 = 1000;

/// Front-end frame interval (elapsed time is fed to the core at this rate).
pub const FRAME_MS: u32 = 50;

/// At or below this many seconds the HUD shows a warning.
pub const WARN_SECONDS: u32 = 6;

/// At or below this many seconds the HUD shows a panic state.
pub const PANIC_SECONDS: u32 = 3;

/// Maximum number of characters the answer field accepts.
pub const MAX_ANSWER_LEN: usize = 12;

/// Key of the durable best-score record.
pub const BEST_SCORE_KEY: &str = "carCounterBestScore";

/// Lifecycle phase of the round controller.
///
/// `Idle` doubles as the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    RoundActive,
    RoundResolved,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::RoundActive => "roundActive",
            Phase::RoundResolved => "roundResolved",
        }
    }
}

/// How a round was resolved. Produced exactly once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The submitted count matched.
    Correct,
    /// The submitted count was wrong; carries the real count.
    Incorrect { correct: u32 },
    /// The countdown ran out first; carries the real count.
    TimedOut { correct: u32 },
}

impl RoundOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, RoundOutcome::Correct)
    }
}

/// Notification emitted to the presentation layer after a submission or timeout.
///
/// This is a superset of [`RoundOutcome`]: a rejected submission produces
/// `ValidationError` without resolving the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeEvent {
    Correct,
    Incorrect { correct: u32 },
    ValidationError,
    TimedOut { correct: u32 },
}

impl OutcomeEvent {
    /// The real car count, when the event reveals it.
    pub fn correct_count(&self) -> Option<u32> {
        match self {
            OutcomeEvent::Incorrect { correct } | OutcomeEvent::TimedOut { correct } => {
                Some(*correct)
            }
            OutcomeEvent::Correct | OutcomeEvent::ValidationError => None,
        }
    }

    /// Whether the front-end should present this as good news.
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeEvent::Correct)
    }
}

impl From<RoundOutcome> for OutcomeEvent {
    fn from(value: RoundOutcome) -> Self {
        match value {
            RoundOutcome::Correct => OutcomeEvent::Correct,
            RoundOutcome::Incorrect { correct } => OutcomeEvent::Incorrect { correct },
            RoundOutcome::TimedOut { correct } => OutcomeEvent::TimedOut { correct },
        }
    }
}

/// Heads-up display values, emitted after every change to any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HudSnapshot {
    pub round: u32,
    pub score: u32,
    pub best: u32,
    /// Whole seconds left on the countdown.
    pub time_left: u32,
}

impl HudSnapshot {
    pub fn urgency(&self) -> TimeUrgency {
        TimeUrgency::for_seconds(self.time_left)
    }
}

/// Visual urgency of the remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUrgency {
    Calm,
    Warn,
    Panic,
}

impl TimeUrgency {
    pub fn for_seconds(time_left: u32) -> Self {
        if time_left <= PANIC_SECONDS {
            TimeUrgency::Panic
        } else if time_left <= WARN_SECONDS {
            TimeUrgency::Warn
        } else {
            TimeUrgency::Calm
        }
    }
}

/// Player-triggered entry points into the round controller.
///
/// Text entry itself is not an action; the typed answer travels with `Submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Leave the menu and begin at round 1
    StartGame,
    /// Submit the typed answer
    Submit,
    /// Move on after a resolved round
    AdvanceRound,
    /// Restart from round 1 keeping the best score
    ResetGame,
    /// Stop the countdown and show the menu
    ReturnToMenu,
}

impl PlayerAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use car_counter_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("startGame"), Some(PlayerAction::StartGame));
    /// assert_eq!(PlayerAction::from_str("SUBMIT"), Some(PlayerAction::Submit));
    /// assert_eq!(PlayerAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "startgame" => Some(PlayerAction::StartGame),
            "submit" => Some(PlayerAction::Submit),
            "nextround" => Some(PlayerAction::AdvanceRound),
            "resetgame" => Some(PlayerAction::ResetGame),
            "menu" => Some(PlayerAction::ReturnToMenu),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::StartGame => "startGame",
            PlayerAction::Submit => "submit",
            PlayerAction::AdvanceRound => "nextRound",
            PlayerAction::ResetGame => "resetGame",
            PlayerAction::ReturnToMenu => "menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_is_consistent() {
        assert!(DEFAULT_MIN_ITEMS <= DEFAULT_START_MAX_ITEMS);
        assert!(DEFAULT_START_MAX_ITEMS <= DEFAULT_MAX_ITEMS_CAP);
        assert!(DEFAULT_MIN_TIME_SECS <= DEFAULT_START_TIME_SECS);
        assert!(PANIC_SECONDS < WARN_SECONDS);
        assert_eq!(COUNTDOWN_TICK_MS % FRAME_MS, 0);
    }

    #[test]
    fn urgency_thresholds() {
        let hud = |time_left| HudSnapshot {
            round: 1,
            score: 0,
            best: 0,
            time_left,
        };
        assert_eq!(hud(14).urgency(), TimeUrgency::Calm);
        assert_eq!(hud(7).urgency(), TimeUrgency::Calm);
        assert_eq!(hud(6).urgency(), TimeUrgency::Warn);
        assert_eq!(hud(4).urgency(), TimeUrgency::Warn);
        assert_eq!(hud(3).urgency(), TimeUrgency::Panic);
        assert_eq!(hud(0).urgency(), TimeUrgency::Panic);
    }

    #[test]
    fn outcome_event_carries_correct_count() {
        assert_eq!(OutcomeEvent::Correct.correct_count(), None);
        assert_eq!(OutcomeEvent::ValidationError.correct_count(), None);
        assert_eq!(
            OutcomeEvent::from(RoundOutcome::Incorrect { correct: 9 }),
            OutcomeEvent::Incorrect { correct: 9 }
        );
        assert!(OutcomeEvent::Correct.is_success());
        assert!(!OutcomeEvent::TimedOut { correct: 3 }.is_success());
    }

    #[test]
    fn player_action_round_trips_names() {
        for action in [
            PlayerAction::StartGame,
            PlayerAction::Submit,
            PlayerAction::AdvanceRound,
            PlayerAction::ResetGame,
            PlayerAction::ReturnToMenu,
        ] {
            assert_eq!(PlayerAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(PlayerAction::from_str("jump"), None);
    }
}
