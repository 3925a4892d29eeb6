//! Fixed-interval snake tick.

use super::state::GameState;
use crate::session::{GameEvent, Phase};

/// Input for a single tick.
///
/// Heading changes do not appear here: they arrive between ticks through
/// [`GameState::queue_heading`] and are consumed at the tick boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub restart: bool,
}

/// Advance the session by one grid step.
///
/// Returns the events the display collaborators react to. While terminal,
/// state is untouched unless the input asks for a restart.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase.is_terminal() {
        if input.restart {
            state.reset();
            log::debug!("snake restarted");
            events.push(GameEvent::Reset);
        }
        return events;
    }

    state.time_ticks += 1;

    // The buffered heading applies here and nowhere else.
    state.heading = state.pending_heading;
    let next = state.head() + state.heading.delta();

    // Bounds and self-intersection against the full current body. The tail
    // cell is still occupied at this point, so stepping into it is a
    // collision.
    if !state.grid.contains(next) || state.body.contains(&next) {
        state.phase = Phase::GameOver;
        log::debug!("snake game over at score {}", state.score);
        events.push(GameEvent::GameOver);
        return events;
    }

    if next == state.food {
        // Grow: the tail stays.
        state.body.push_front(next);
        state.score += 1;
        events.push(GameEvent::Scored(state.score));
        match state.place_food() {
            Some(cell) => state.food = cell,
            None => {
                // Body covers the grid; nothing left to eat.
                state.phase = Phase::GameOver;
                events.push(GameEvent::GameOver);
            }
        }
    } else {
        state.body.push_front(next);
        state.body.pop_back();
    }

    events
}
