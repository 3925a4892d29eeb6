//! Session settings and the input-mode capability flag.
//!
//! The capability flag is injected at session creation by whoever embeds the
//! games; the cores never inspect the environment themselves.

use serde::{Deserialize, Serialize};

use crate::consts::SNAKE_TICK_MS;

/// How the player delivers input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputMode {
    /// Touch screen only
    Touch,
    /// Pointer and keyboard available
    #[default]
    Desktop,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Touch => "Touch",
            InputMode::Desktop => "Desktop",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "touch" | "mobile" => Some(InputMode::Touch),
            "desktop" => Some(InputMode::Desktop),
            _ => None,
        }
    }
}

/// Per-session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Input capability flag
    pub input_mode: InputMode,
    /// Snake tick interval (ms)
    pub snake_tick_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_mode: InputMode::default(),
            snake_tick_ms: SNAKE_TICK_MS,
        }
    }
}

impl Settings {
    pub fn with_input_mode(mode: InputMode) -> Self {
        Self {
            input_mode: mode,
            ..Self::default()
        }
    }

    /// Instruction line for a flappy session.
    pub fn flappy_instructions(&self) -> &'static str {
        match self.input_mode {
            InputMode::Touch => "Tap anywhere to flap! Avoid the pipes!",
            InputMode::Desktop => "Tap, click, or press Space to flap. Avoid the pipes!",
        }
    }

    /// Instruction line for a snake session.
    pub fn snake_instructions(&self) -> &'static str {
        match self.input_mode {
            InputMode::Touch => "Swipe to steer. Eat the food, avoid the walls!",
            InputMode::Desktop => "Arrow keys or WASD to steer. Eat the food, avoid the walls!",
        }
    }

    /// Prompt shown over the game-over overlay.
    pub fn restart_prompt(&self) -> &'static str {
        match self.input_mode {
            InputMode::Touch => "Tap to Restart",
            InputMode::Desktop => "Tap or Click to Restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mode_round_trip() {
        assert_eq!(InputMode::from_str("touch"), Some(InputMode::Touch));
        assert_eq!(InputMode::from_str("mobile"), Some(InputMode::Touch));
        assert_eq!(InputMode::from_str("Desktop"), Some(InputMode::Desktop));
        assert_eq!(InputMode::from_str("gamepad"), None);
        assert_eq!(
            InputMode::from_str(InputMode::Touch.as_str()),
            Some(InputMode::Touch)
        );
    }

    #[test]
    fn test_instructions_follow_capability() {
        let touch = Settings::with_input_mode(InputMode::Touch);
        let desktop = Settings::default();
        assert!(touch.flappy_instructions().starts_with("Tap anywhere"));
        assert!(desktop.flappy_instructions().contains("Space"));
        assert!(!touch.snake_instructions().contains("Arrow"));
        assert_eq!(touch.restart_prompt(), "Tap to Restart");
    }
}
