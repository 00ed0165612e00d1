//! Terminal input module.
//!
//! Maps `crossterm` key events into [`InputEvent`]s for the current game phase
//! and provides the bounded text field the player types answers into.

pub mod answer;
pub mod map;

pub use car_counter_types as types;

pub use answer::{AnswerEdit, AnswerField};
pub use map::{map_key, should_quit, InputEvent};
