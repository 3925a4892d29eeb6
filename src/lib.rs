//! flapgrid - deterministic cores for two small arcade games
//!
//! Core modules:
//! - `flappy`: gravity/impulse pipe-dodger, ticked once per animation frame
//! - `snake`: grid state machine, ticked on a fixed wall-clock interval
//! - `schedule`: wall-clock to simulation-tick accumulator
//! - `session`: shared phase/event vocabulary for the display collaborators
//! - `input`/`settings`: key bindings and the input-mode capability flag
//! - `highscores`: in-memory leaderboards

pub mod flappy;
pub mod highscores;
pub mod input;
pub mod schedule;
pub mod session;
pub mod settings;
pub mod snake;

pub use highscores::HighScores;
pub use session::{GameEvent, Phase};
pub use settings::{InputMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Default field size in pixels (desktop canvas)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative is up)
    pub const FLAP_IMPULSE: f32 = -8.0;
    /// Bird diameter in pixels
    pub const BIRD_SIZE: f32 = 32.0;
    /// Fixed horizontal position of the bird center
    pub const BIRD_X: f32 = 60.0;

    /// Pipe width in pixels
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Vertical opening between the pipe halves
    pub const PIPE_GAP: f32 = 150.0;
    /// Leftward scroll per tick
    pub const PIPE_SPEED: f32 = 3.0;
    /// Horizontal spacing of freshly seeded pipes
    pub const PIPE_SPACING: f32 = 200.0;
    /// Size of the recycled pipe window
    pub const PIPE_COUNT: usize = 3;
    /// Minimum distance between a gap and the field edges
    pub const GAP_MARGIN: f32 = 20.0;

    /// Grid cell size in pixels
    pub const GRID_SIZE: u32 = 20;
    /// Snake starting length in cells
    pub const SNAKE_START_LEN: usize = 3;
    /// Wall-clock interval between snake ticks (ms)
    pub const SNAKE_TICK_MS: u32 = 100;

    /// Nominal frame interval for headless flappy drivers (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per scheduler advance
    pub const MAX_SUBSTEPS: u32 = 8;
}
