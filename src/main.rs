//! flapgrid entry point.
//!
//! Headless demo: runs both simulation cores deterministically with
//! scripted input and logs what the display collaborators would show.

use serde::Serialize;

use flapgrid::consts::*;
use flapgrid::schedule::FixedTimestep;
use flapgrid::session::{GameEvent, score_text};
use flapgrid::snake::{self, Direction, Grid};
use flapgrid::{HighScores, Settings, flappy};

/// End-of-run summary for one core.
#[derive(Debug, Serialize)]
struct RunSummary {
    game: &'static str,
    seed: u64,
    score: u32,
    ticks: u64,
}

const DEMO_SEED: u64 = 2024;
/// Hard stop for the scripted runs, in ticks.
const DEMO_TICK_LIMIT: u64 = 2000;

fn main() {
    env_logger::init();

    let settings = Settings::default();
    log::info!("flapgrid headless demo ({} input)", settings.input_mode.as_str());
    log::info!("flappy: {}", settings.flappy_instructions());
    log::info!("snake:  {}", settings.snake_instructions());

    let flappy_summary = run_flappy(DEMO_SEED);
    let snake_summary = run_snake(DEMO_SEED, &settings);

    let mut flappy_board = HighScores::new();
    flappy_board.add_score(flappy_summary.score, flappy_summary.ticks);
    let mut snake_board = HighScores::new();
    snake_board.add_score(snake_summary.score, snake_summary.ticks);

    for summary in [&flappy_summary, &snake_summary] {
        if let Ok(json) = serde_json::to_string(summary) {
            println!("{json}");
        }
    }
    log::info!("flappy board: {}", flappy_board.to_json());
    log::info!("snake board:  {}", snake_board.to_json());
}

/// Drive a flappy session at the nominal frame rate, flapping on a fixed
/// cadence until the run ends.
fn run_flappy(seed: u64) -> RunSummary {
    let mut state = flappy::GameState::new(FIELD_WIDTH, FIELD_HEIGHT, seed);
    let mut clock = FixedTimestep::new(FRAME_DT);

    while !state.phase.is_terminal() && state.time_ticks < DEMO_TICK_LIMIT {
        for _ in 0..clock.advance(FRAME_DT) {
            let input = flappy::TickInput {
                flap: state.time_ticks % 18 == 0,
            };
            report("flappy", &flappy::tick(&mut state, &input));
        }
    }

    RunSummary {
        game: "flappy",
        seed,
        score: state.score,
        ticks: state.time_ticks,
    }
}

/// Drive a snake session at its wall-clock interval, steering a clockwise
/// patrol route.
fn run_snake(seed: u64, settings: &Settings) -> RunSummary {
    let mut state = snake::GameState::new(Grid::from_canvas(480, 640), seed);
    state.tick_ms = settings.snake_tick_ms;
    let mut clock = FixedTimestep::from_millis(state.tick_ms);
    let step = clock.step();

    let patrol = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    while !state.phase.is_terminal() && state.time_ticks < DEMO_TICK_LIMIT {
        for _ in 0..clock.advance(step) {
            let leg = (state.time_ticks / 7) as usize % patrol.len();
            state.queue_heading(patrol[leg]);
            report("snake", &snake::tick(&mut state, &snake::TickInput::default()));
        }
    }

    RunSummary {
        game: "snake",
        seed,
        score: state.score,
        ticks: state.time_ticks,
    }
}

fn report(game: &str, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Scored(score) => log::info!("{game}: {}", score_text(*score)),
            GameEvent::GameOver => log::info!("{game}: game over"),
            GameEvent::Reset => log::info!("{game}: reset"),
        }
    }
}
