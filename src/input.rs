//! Key-code bindings for the input collaborator.
//!
//! Raw events arrive as DOM-style key codes (`"Space"`, `"ArrowUp"`, …).
//! Each game exposes one binding function; codes it does not recognize map
//! to `None` and are ignored. Pointer and touch gestures are translated by
//! the platform layer into the same events.

use crate::snake::Direction;

/// The single flappy gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyEvent {
    /// Flap while running, restart once terminal
    FlapOrRestart,
}

/// Snake separates steering from restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    SetHeading(Direction),
    Restart,
}

/// Keyboard binding for a flappy session.
pub fn flappy_binding(code: &str) -> Option<FlappyEvent> {
    match code {
        "Space" => Some(FlappyEvent::FlapOrRestart),
        _ => None,
    }
}

/// Keyboard binding for a snake session. Arrows and WASD steer.
pub fn snake_binding(code: &str) -> Option<SnakeEvent> {
    match code {
        "ArrowUp" | "KeyW" => Some(SnakeEvent::SetHeading(Direction::Up)),
        "ArrowDown" | "KeyS" => Some(SnakeEvent::SetHeading(Direction::Down)),
        "ArrowLeft" | "KeyA" => Some(SnakeEvent::SetHeading(Direction::Left)),
        "ArrowRight" | "KeyD" => Some(SnakeEvent::SetHeading(Direction::Right)),
        "Space" | "Enter" => Some(SnakeEvent::Restart),
        _ => None,
    }
}
