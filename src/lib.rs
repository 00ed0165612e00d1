//! Car Counter (workspace facade crate).
//!
//! Re-exports the game crates under `car_counter::{core,input,term,types}` and
//! hosts the glue that turns them into a playable terminal game: [`app`] routes
//! input to the round controller, [`session`] runs the single-threaded event loop.

pub mod app;
pub mod session;

pub use car_counter_core as core;
pub use car_counter_input as input;
pub use car_counter_term as term;
pub use car_counter_types as types;

pub use app::App;
pub use session::{run_session, spawn_input_thread};
