//! Snake game state on an integer grid.

use std::collections::VecDeque;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_SIZE, SNAKE_START_LEN, SNAKE_TICK_MS};
use crate::session::Phase;

/// A grid cell coordinate. Collision is integer equality.
pub type Cell = IVec2;

/// Discrete movement heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Cell offset for one step. Y grows downward (canvas convention).
    pub fn delta(self) -> Cell {
        match self {
            Direction::Up => Cell::new(0, -1),
            Direction::Down => Cell::new(0, 1),
            Direction::Left => Cell::new(-1, 0),
            Direction::Right => Cell::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Playfield dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    /// Grid covering a pixel canvas at `GRID_SIZE`-pixel cells. A 480x640
    /// canvas yields 24x32.
    pub fn from_canvas(width_px: u32, height_px: u32) -> Self {
        Self::new((width_px / GRID_SIZE) as i32, (height_px / GRID_SIZE) as i32)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }

    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }
}

/// Complete snake session state (deterministic, serializable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Body cells, head at the front
    pub body: VecDeque<Cell>,
    /// Heading in effect for the current tick
    pub heading: Direction,
    /// Buffered heading, applied only at the next tick boundary
    pub pending_heading: Direction,
    pub food: Cell,
    /// Monotonic score
    pub score: u32,
    pub phase: Phase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Wall-clock interval between ticks (ms), fixed at session creation
    pub tick_ms: u32,
    /// Food placement RNG; the stream keeps advancing across resets
    rng: Pcg32,
}

impl GameState {
    /// Create a session: length-3 snake centered on the grid, heading right,
    /// first food already placed.
    pub fn new(grid: Grid, seed: u64) -> Self {
        let mut state = Self {
            grid,
            seed,
            body: VecDeque::new(),
            heading: Direction::Right,
            pending_heading: Direction::Right,
            food: Cell::ZERO,
            score: 0,
            phase: Phase::Running,
            time_ticks: 0,
            tick_ms: SNAKE_TICK_MS,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.respawn();
        state
    }

    /// Reinitialize in place. The RNG stream continues so a whole multi-run
    /// session stays a pure function of the original seed and the inputs.
    pub fn reset(&mut self) {
        self.score = 0;
        self.phase = Phase::Running;
        self.time_ticks = 0;
        self.respawn();
    }

    fn respawn(&mut self) {
        self.heading = Direction::Right;
        self.pending_heading = Direction::Right;
        self.body.clear();
        let center = Cell::new(self.grid.cols / 2, self.grid.rows / 2);
        for i in 0..SNAKE_START_LEN {
            // Head first, body extending left.
            self.body.push_back(center - Cell::new(i as i32, 0));
        }
        match self.place_food() {
            Some(cell) => self.food = cell,
            // Degenerate grid with no free cell; nothing to play.
            None => self.phase = Phase::GameOver,
        }
    }

    /// Head cell. The body is never empty while a session exists.
    #[inline]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Direction-change gate: the exact reverse of the current heading is
    /// rejected so the snake cannot fold into itself within a single tick.
    /// Accepted changes are buffered until the next tick boundary.
    pub fn queue_heading(&mut self, dir: Direction) {
        if dir != self.heading.opposite() {
            self.pending_heading = dir;
        }
    }

    /// Uniform random free cell, rejection-sampled against the whole body.
    /// `None` when the body covers the grid.
    pub(crate) fn place_food(&mut self) -> Option<Cell> {
        if self.body.len() >= self.grid.cell_count() {
            return None;
        }
        loop {
            let cell = Cell::new(
                self.rng.random_range(0..self.grid.cols),
                self.rng.random_range(0..self.grid.rows),
            );
            if !self.body.contains(&cell) {
                return Some(cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_canvas() {
        let grid = Grid::from_canvas(480, 640);
        assert_eq!(grid.cols, 24);
        assert_eq!(grid.rows, 32);
        assert_eq!(grid.cell_count(), 768);
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::new(24, 32);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(23, 31)));
        assert!(!grid.contains(Cell::new(-1, 5)));
        assert!(!grid.contains(Cell::new(24, 5)));
        assert!(!grid.contains(Cell::new(5, 32)));
    }

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(Grid::from_canvas(480, 640), 7);
        assert_eq!(state.body.len(), SNAKE_START_LEN);
        assert_eq!(state.head(), Cell::new(12, 16));
        assert_eq!(state.body[1], Cell::new(11, 16));
        assert_eq!(state.body[2], Cell::new(10, 16));
        assert_eq!(state.heading, Direction::Right);
        assert!(!state.body.contains(&state.food));
        assert!(state.grid.contains(state.food));
    }

    #[test]
    fn test_reverse_heading_rejected() {
        let mut state = GameState::new(Grid::from_canvas(480, 640), 1);
        state.queue_heading(Direction::Left);
        assert_eq!(state.pending_heading, Direction::Right);

        state.queue_heading(Direction::Up);
        assert_eq!(state.pending_heading, Direction::Up);
    }

    #[test]
    fn test_food_never_lands_on_body() {
        for seed in 0..20 {
            let mut state = GameState::new(Grid::new(6, 6), seed);
            // Crowd the grid to force rejections.
            state.body = (0..5)
                .flat_map(|x| (0..5).map(move |y| Cell::new(x, y)))
                .collect();
            for _ in 0..50 {
                let cell = state.place_food().unwrap();
                assert!(!state.body.contains(&cell));
                assert!(state.grid.contains(cell));
            }
        }
    }

    #[test]
    fn test_full_body_leaves_no_food_cell() {
        let mut state = GameState::new(Grid::new(4, 4), 5);
        state.body = (0..4)
            .flat_map(|x| (0..4).map(move |y| Cell::new(x, y)))
            .collect();
        assert_eq!(state.place_food(), None);
    }
}
