//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the car counting game: difficulty scaling,
//! the round countdown, answer evaluation, scoring and best-score persistence.
//! It has no dependency on a terminal or any other display surface; a front-end
//! plugs in through the [`Presenter`] trait and drives time through
//! [`RoundController::tick`].
//!
//! - **Deterministic**: the same seed and inputs replay the same game
//! - **Testable**: the RNG, the best-score store and the presenter are injected
//! - **Single-threaded**: the countdown is advanced by the caller, never by a
//!   background thread
//!
//! # Module Structure
//!
//! - [`config`]: tunable difficulty parameters
//! - [`difficulty`]: round number to (car ceiling, time limit)
//! - [`rng`]: seedable random source
//! - [`timer`]: one-second countdown with cancellation ids
//! - [`store`]: durable best-score record
//! - [`score`]: current and best score
//! - [`controller`]: the round lifecycle state machine
//!
//! # Example
//!
//! ```
//! use car_counter_core::{GameConfig, MemoryStore, Presenter, RoundController, SimpleRng};
//! use car_counter_core::types::{HudSnapshot, OutcomeEvent, Phase};
//!
//! struct Quiet;
//!
//! impl Presenter for Quiet {
//!     fn display_item_count(&mut self, _count: u32) {}
//!     fn show_outcome(&mut self, _event: OutcomeEvent) {}
//!     fn clear_outcome(&mut self) {}
//!     fn update_hud(&mut self, _hud: HudSnapshot) {}
//! }
//!
//! let mut game = RoundController::new(
//!     GameConfig::default(),
//!     Box::new(MemoryStore::new()),
//!     SimpleRng::new(42),
//!     Quiet,
//! );
//! game.start_game();
//!
//! let answer = game.state().current_item_count().to_string();
//! game.submit_answer(&answer);
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.phase(), Phase::RoundResolved);
//! ```

pub mod config;
pub mod controller;
pub mod difficulty;
pub mod rng;
pub mod score;
pub mod store;
pub mod timer;

pub use car_counter_types as types;

pub use config::{ConfigError, GameConfig};
pub use controller::{parse_answer, GameState, InvalidAnswer, Presenter, RoundController, Submission};
pub use difficulty::{max_items_for_round, params_for_round, time_limit_for_round, RoundParams};
pub use rng::{RandomSource, SimpleRng};
pub use score::ScoreTracker;
pub use store::{default_data_dir, BestScoreStore, JsonFileStore, MemoryStore, StoreError};
pub use timer::{CountdownId, CountdownObserver, RoundTimer};
