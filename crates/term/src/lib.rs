//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders into
//! a simple framebuffer that is flushed to the terminal with crossterm, and it
//! implements the core's [`Presenter`](crate::core::Presenter) boundary through
//! [`ScreenState`].

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use car_counter_core as core;
pub use car_counter_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FrameInput, GameView, Viewport, CAR_GLYPH};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use screen::{outcome_message, ScreenState};
