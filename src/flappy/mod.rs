//! Deterministic flappy simulation
//!
//! All pipe-dodger gameplay lives here. The module is pure and deterministic:
//! - Per-tick constants, one tick per animation frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bird_out_of_bounds, bird_pipe_collision};
pub use state::{Bird, GameState, Pipe};
pub use tick::{TickInput, tick};
