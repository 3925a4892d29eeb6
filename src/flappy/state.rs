//! Flappy game state and entities.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::session::Phase;

/// The player entity. Horizontal position is fixed at `BIRD_X`; only the
/// vertical axis is simulated. Respawned in place on reset, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical center position (pixels, y grows downward)
    pub y: f32,
    /// Vertical velocity (pixels per tick)
    pub vy: f32,
    /// Collision radius (half the drawn size)
    pub radius: f32,
}

impl Bird {
    fn spawn(field_height: f32) -> Self {
        Self {
            y: field_height / 2.0,
            vy: 0.0,
            radius: BIRD_SIZE / 2.0,
        }
    }
}

/// One obstacle: a pipe pair with a vertical opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge (pixels)
    pub x: f32,
    /// Top of the gap span
    pub gap_top: f32,
}

impl Pipe {
    /// Bottom of the gap span.
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + PIPE_GAP
    }
}

/// Complete flappy session state (deterministic, serializable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Field size in pixels, fixed at session creation
    pub width: f32,
    pub height: f32,
    /// Run seed for reproducibility
    pub seed: u64,
    pub bird: Bird,
    /// Sliding window of obstacles, front is the leftmost
    pub pipes: VecDeque<Pipe>,
    /// Monotonic score
    pub score: u32,
    pub phase: Phase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Gap offset RNG; the stream keeps advancing across resets
    rng: Pcg32,
}

impl GameState {
    /// Create a session for the given field size and seed.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut state = Self {
            width,
            height,
            seed,
            bird: Bird::spawn(height),
            pipes: VecDeque::with_capacity(PIPE_COUNT),
            score: 0,
            phase: Phase::Running,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.seed_pipes();
        state
    }

    /// Reinitialize in place. The RNG stream continues so a whole multi-run
    /// session stays a pure function of the original seed and the inputs.
    pub fn reset(&mut self) {
        self.bird = Bird::spawn(self.height);
        self.pipes.clear();
        self.score = 0;
        self.phase = Phase::Running;
        self.time_ticks = 0;
        self.seed_pipes();
    }

    fn seed_pipes(&mut self) {
        for i in 0..PIPE_COUNT {
            let gap_top = self.roll_gap_top();
            self.pipes.push_back(Pipe {
                x: self.width + i as f32 * PIPE_SPACING,
                gap_top,
            });
        }
    }

    /// Fresh gap offset, uniform over the span that keeps the opening at
    /// least `GAP_MARGIN` from both field edges.
    pub(crate) fn roll_gap_top(&mut self) -> f32 {
        self.rng
            .random_range(GAP_MARGIN..self.height - PIPE_GAP - GAP_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(480.0, 640.0, 7);
        assert_eq!(state.pipes.len(), PIPE_COUNT);
        assert_eq!(state.bird.y, 320.0);
        assert_eq!(state.bird.vy, 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, Phase::Running);
        // Pipes start off the right edge, evenly spaced.
        for (i, pipe) in state.pipes.iter().enumerate() {
            assert_eq!(pipe.x, 480.0 + i as f32 * PIPE_SPACING);
        }
    }

    #[test]
    fn test_gap_offsets_stay_in_field() {
        let mut state = GameState::new(480.0, 640.0, 99);
        for _ in 0..200 {
            let top = state.roll_gap_top();
            assert!(top >= GAP_MARGIN);
            assert!(top + PIPE_GAP <= state.height - GAP_MARGIN);
        }
    }

    #[test]
    fn test_reset_reinitializes() {
        let mut state = GameState::new(480.0, 640.0, 3);
        state.bird.y = 10.0;
        state.bird.vy = -4.0;
        state.score = 9;
        state.phase = Phase::GameOver;
        state.time_ticks = 500;

        state.reset();
        assert_eq!(state.bird.y, 320.0);
        assert_eq!(state.bird.vy, 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.pipes.len(), PIPE_COUNT);
    }
}
