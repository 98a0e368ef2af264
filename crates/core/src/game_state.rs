//! Game state module - the snake simulation state machine
//!
//! Owns the wrap bounds, the snake body, the buffered direction, the food
//! cell, and the step accumulator. The host drives it with [`GameState::tick`]
//! and reads score, positions, and the terminal flags back out.
//!
//! The simulation is single-threaded and cooperative: nothing here blocks,
//! and after a terminal latch is set every further `tick` is a no-op.

use std::collections::VecDeque;
use std::time::Duration;

use crate::bounds::Bounds;
use crate::config::{ConfigError, GameConfig};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Direction};

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    bounds: Bounds,
    step_period: Duration,
    /// Elapsed real time not yet converted into steps. Always below
    /// `step_period` after stepping; reduced by exactly one period per
    /// step, never reset, so no time is lost to rounding.
    accumulator: Duration,
    /// Last requested heading; applied on the next step.
    direction: Option<Direction>,
    /// Body cells, head at the front. Never empty.
    body: VecDeque<Cell>,
    food: Cell,
    score: u32,
    game_over: bool,
    board_full: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Build a simulation from a validated configuration.
    ///
    /// Bounds are frozen here; food is placed once the bounds exist.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        if config.step_period.is_zero() {
            return Err(ConfigError::NonPositiveStepPeriod);
        }

        let bounds = Bounds::from_center_extent(config.center, config.extent)?;
        if bounds.cell_count() < 2 {
            return Err(ConfigError::BoardTooSmall);
        }

        let mut body = VecDeque::with_capacity(16);
        body.push_back(config.start);

        let mut state = Self {
            bounds,
            step_period: config.step_period,
            accumulator: Duration::ZERO,
            direction: config.initial_direction,
            body,
            food: config.start,
            score: 0,
            game_over: false,
            board_full: false,
            rng: SimpleRng::new(config.seed),
        };

        match state.random_free_cell() {
            Some(cell) => state.food = cell,
            None => state.board_full = true,
        }

        Ok(state)
    }

    /// Latch a new heading. Unconditional and immediate: the last call
    /// before a step wins, and reversing into the body is not prevented.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// Advance the simulation by `dt` of real time.
    ///
    /// Whole steps are taken while the accumulated time covers the step
    /// period; the remainder is carried into the next call. No-op once the
    /// game has ended.
    pub fn tick(&mut self, dt: Duration) {
        if self.ended() {
            return;
        }

        self.accumulator += dt;
        while self.accumulator >= self.step_period {
            self.accumulator -= self.step_period;
            self.step();
            if self.ended() {
                break;
            }
        }
    }

    /// Tail segments grown so far. Starts at 0.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the snake has filled the board and no food cell remains.
    pub fn is_board_full(&self) -> bool {
        self.board_full
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Body cells in order, head first.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `cell` is the current head cell.
    pub fn is_head_at(&self, cell: Cell) -> bool {
        self.head() == cell
    }

    /// Whether `cell` is occupied by any non-head segment.
    pub fn is_body_at(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|&c| c == cell)
    }

    /// Copy the observable state into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.bounds = self.bounds;
        out.body.clear();
        out.body.extend(self.body.iter().copied());
        out.food = self.food;
        out.score = self.score;
        out.game_over = self.game_over;
        out.board_full = self.board_full;
    }

    /// Convenience helper that allocates a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn ended(&self) -> bool {
        self.game_over || self.board_full
    }

    /// One logical step: move the head one cell in the buffered heading,
    /// cascade the body, then resolve collision and food pickup.
    fn step(&mut self) {
        let (dx, dy) = self.direction.map_or((0, 0), Direction::delta);
        let next_head = self.bounds.wrap(self.head().offset(dx, dy));

        // Spawn cell for a new segment, if this step grows the snake.
        let previous_tail = *self.body.back().unwrap();

        // Cascade by value: every segment ends on the cell its predecessor
        // held before this step.
        self.body.push_front(next_head);
        self.body.pop_back();

        if self.is_body_at(next_head) {
            self.game_over = true;
            return;
        }

        if next_head == self.food {
            self.score += 1;
            self.body.push_back(previous_tail);
            match self.random_free_cell() {
                Some(cell) => self.food = cell,
                None => self.board_full = true,
            }
        }
    }

    /// Uniform draw over the bounds, rejecting cells occupied by the snake.
    ///
    /// The occupancy precheck bounds the retry loop: `None` means the board
    /// has no free cell left.
    fn random_free_cell(&mut self) -> Option<Cell> {
        if self.body.len() as u64 >= self.bounds.cell_count() {
            return None;
        }

        loop {
            let candidate = Cell::new(
                self.rng.next_between(self.bounds.min_x(), self.bounds.max_x()),
                self.rng.next_between(self.bounds.min_y(), self.bounds.max_y()),
            );

            if !self.is_head_at(candidate) && !self.is_body_at(candidate) {
                return Some(candidate);
            }
        }
    }
}
