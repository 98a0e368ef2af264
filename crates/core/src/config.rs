//! Run configuration for the simulation.
//!
//! All values are fixed at construction; nothing here changes mid-run.

use std::time::Duration;

use thiserror::Error;

use crate::types::{Cell, Direction, DEFAULT_GRID_EXTENT, DEFAULT_STEP_PERIOD_MS};

/// Configuration handed to [`crate::GameState::new`].
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Time between snake movements.
    pub step_period: Duration,
    /// Center of the wrap region, in grid units.
    pub center: (f64, f64),
    /// Extent of the wrap region per axis, in cells.
    pub extent: (f64, f64),
    /// Starting head cell.
    pub start: Cell,
    /// Heading before any input. `None` keeps the snake in place until the
    /// first direction event.
    pub initial_direction: Option<Direction>,
    /// Seed for food placement. Same seed, same food sequence.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step_period: Duration::from_millis(DEFAULT_STEP_PERIOD_MS),
            center: (0.0, 0.0),
            extent: (DEFAULT_GRID_EXTENT, DEFAULT_GRID_EXTENT),
            start: Cell::new(0, 0),
            initial_direction: None,
            seed: 1,
        }
    }
}

/// Rejected configurations. Surfaced synchronously from construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("step period must be positive")]
    NonPositiveStepPeriod,
    #[error("grid extent {0}x{1} produces an empty wrap region")]
    EmptyBounds(f64, f64),
    #[error("grid needs at least two cells, one for the snake and one for the food")]
    BoardTooSmall,
}
