//! Shared session vocabulary: phase, tick events, score display text.

use serde::{Deserialize, Serialize};

/// Current phase of a game session.
///
/// The transition is one-way: once `GameOver`, physics freezes and only an
/// explicit reset returns the session to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

impl Phase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}

/// Observable outcome of a single tick.
///
/// Consumed by the score display collaborator; the simulation never reads
/// these back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score changed; carries the new total
    Scored(u32),
    /// Terminal flag flipped this tick
    GameOver,
    /// Session was reinitialized
    Reset,
}

/// Text line shown by the score display.
pub fn score_text(score: u32) -> String {
    format!("SCORE: {score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "SCORE: 0");
        assert_eq!(score_text(42), "SCORE: 42");
    }

    #[test]
    fn test_phase_terminal() {
        assert!(!Phase::Running.is_terminal());
        assert!(Phase::GameOver.is_terminal());
    }
}
