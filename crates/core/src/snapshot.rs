//! Render snapshot - plain data copied out of the simulation.
//!
//! Observers (the terminal view, tests) work from a snapshot instead of
//! borrowing the live state. [`crate::GameState::snapshot_into`] refreshes
//! one in place so the per-frame path stops allocating once warm.

use crate::bounds::Bounds;
use crate::types::Cell;

/// Observable state of one simulation instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSnapshot {
    pub bounds: Bounds,
    /// Body cells, head first.
    pub body: Vec<Cell>,
    pub food: Cell,
    /// Tail segments grown so far.
    pub score: u32,
    pub game_over: bool,
    pub board_full: bool,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.body.first().copied()
    }

    /// Whether the run has reached either terminal state.
    pub fn ended(&self) -> bool {
        self.game_over || self.board_full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty() {
        let snap = GameSnapshot::default();
        assert!(snap.body.is_empty());
        assert_eq!(snap.head(), None);
        assert!(!snap.ended());
    }

    #[test]
    fn test_head_is_first_body_cell() {
        let snap = GameSnapshot {
            body: vec![Cell::new(3, 1), Cell::new(2, 1)],
            ..GameSnapshot::default()
        };
        assert_eq!(snap.head(), Some(Cell::new(3, 1)));
    }

    #[test]
    fn test_ended_covers_both_latches() {
        let mut snap = GameSnapshot::default();
        snap.game_over = true;
        assert!(snap.ended());

        let mut snap = GameSnapshot::default();
        snap.board_full = true;
        assert!(snap.ended());
    }
}
