//! Core simulation logic - pure, deterministic, and testable
//!
//! This crate contains the whole snake state machine and nothing else.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Unit tests cover every game rule
//! - **Portable**: Can run in any host (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`bounds`]: inclusive wrap region with single-step edge wrapping
//! - [`config`]: run configuration and construction errors
//! - [`game_state`]: the simulation itself - body, food, latches, stepping
//! - [`rng`]: seeded LCG used for food placement
//! - [`snapshot`]: plain-data view handed to observers
//!
//! # Game Rules
//!
//! - The snake advances one cell per logical step, in the last direction
//!   requested; leaving the board re-enters at the opposite edge.
//! - Eating food grows the tail by one segment, at the cell the tail
//!   occupied before the step, and relocates the food to a free cell.
//! - Running into the body ends the game; filling the whole board ends it
//!   as a win.
//!
//! # Timing
//!
//! The host owns the clock and calls [`GameState::tick`] with elapsed real
//! time. The simulation accumulates it and converts whole step periods into
//! logical steps, carrying the remainder, so step cadence does not drift
//! with the host's frame rate.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_core::types::{Cell, Direction};
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! game.set_direction(Direction::Right);
//! game.tick(Duration::from_millis(200));
//!
//! assert_eq!(game.head(), Cell::new(1, 0));
//! assert!(!game.is_game_over());
//! ```

pub mod bounds;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use bounds::Bounds;
pub use config::{ConfigError, GameConfig};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
