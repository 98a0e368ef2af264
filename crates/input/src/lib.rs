//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Direction`] values and
//! quit requests. Intentionally stateless: the simulation itself latches the
//! last requested heading, so there is no held-key tracking here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
