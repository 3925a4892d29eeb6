//! Deterministic snake simulation
//!
//! A discrete state machine on an integer grid:
//! - Fixed wall-clock tick interval, independent of the frame rate
//! - Heading input is buffered and applied only at tick boundaries
//! - Collision is exact cell equality, no floating point
//! - Seeded RNG only (food placement)

pub mod state;
pub mod tick;

pub use state::{Cell, Direction, GameState, Grid};
pub use tick::{TickInput, tick};
