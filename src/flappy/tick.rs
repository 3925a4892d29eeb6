//! Per-frame flappy tick.

use super::collision::{bird_out_of_bounds, bird_pipe_collision};
use super::state::{GameState, Pipe};
use crate::consts::*;
use crate::session::{GameEvent, Phase};

/// Input for a single tick.
///
/// `flap` doubles as restart once the session is terminal, mirroring the
/// single tap/click/space gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub flap: bool,
}

/// Advance the session by one tick (one animation frame).
///
/// Returns the events the display collaborators react to. While terminal,
/// state is untouched unless the input asks for a restart.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase.is_terminal() {
        if input.flap {
            state.reset();
            log::debug!("flappy restarted");
            events.push(GameEvent::Reset);
        }
        return events;
    }

    state.time_ticks += 1;

    // A flap pins the velocity for this tick; gravity applies otherwise.
    if input.flap {
        state.bird.vy = FLAP_IMPULSE;
    } else {
        state.bird.vy += GRAVITY;
    }
    state.bird.y += state.bird.vy;

    // Ceiling/ground ends the run. The rest of the tick still plays out so
    // obstacle motion matches what the final frame shows; position is not
    // clamped.
    if bird_out_of_bounds(&state.bird, state.height) {
        state.phase = Phase::GameOver;
    }

    for pipe in &mut state.pipes {
        pipe.x -= PIPE_SPEED;
    }

    // Recycle the front pipe once it has fully scrolled off; passing it is
    // what scores.
    if state.pipes.front().is_some_and(|p| p.x < -PIPE_WIDTH) {
        state.pipes.pop_front();
        let gap_top = state.roll_gap_top();
        state.pipes.push_back(Pipe {
            x: state.width,
            gap_top,
        });
        state.score += 1;
        events.push(GameEvent::Scored(state.score));
    }

    // Every pipe is tested; the terminal flag is idempotent.
    for pipe in &state.pipes {
        if bird_pipe_collision(&state.bird, pipe) {
            state.phase = Phase::GameOver;
        }
    }

    if state.phase.is_terminal() {
        log::debug!("flappy game over at score {}", state.score);
        events.push(GameEvent::GameOver);
    }

    events
}
