//! Collision predicates for the flappy field.
//!
//! Everything is an axis-aligned span test: the bird's box against a pipe's
//! horizontal span, then the bird's vertical span against the gap opening.

use super::state::{Bird, Pipe};
use crate::consts::{BIRD_X, PIPE_WIDTH};

/// True when the bird's box overlaps the solid part of a pipe pair.
///
/// The horizontal spans must overlap and the bird's vertical span must poke
/// outside the gap span.
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_x =
        BIRD_X + bird.radius > pipe.x && BIRD_X - bird.radius < pipe.x + PIPE_WIDTH;
    let outside_gap =
        bird.y - bird.radius < pipe.gap_top || bird.y + bird.radius > pipe.gap_bottom();
    overlaps_x && outside_gap
}

/// True when the bird's half-size pokes past the ceiling or the ground.
pub fn bird_out_of_bounds(bird: &Bird, field_height: f32) -> bool {
    bird.y + bird.radius > field_height || bird.y - bird.radius < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BIRD_SIZE, PIPE_GAP};

    fn bird_at(y: f32) -> Bird {
        Bird {
            y,
            vy: 0.0,
            radius: BIRD_SIZE / 2.0,
        }
    }

    #[test]
    fn test_bird_clears_gap() {
        // Pipe aligned with the bird, gap centered on the bird.
        let pipe = Pipe {
            x: BIRD_X - 10.0,
            gap_top: 300.0 - PIPE_GAP / 2.0,
        };
        assert!(!bird_pipe_collision(&bird_at(300.0), &pipe));
    }

    #[test]
    fn test_bird_hits_top_pipe() {
        let pipe = Pipe {
            x: BIRD_X - 10.0,
            gap_top: 300.0,
        };
        // Bird's top edge pokes above the gap.
        assert!(bird_pipe_collision(&bird_at(300.0 + 10.0), &pipe));
    }

    #[test]
    fn test_bird_hits_bottom_pipe() {
        let pipe = Pipe {
            x: BIRD_X - 10.0,
            gap_top: 300.0,
        };
        assert!(bird_pipe_collision(&bird_at(300.0 + PIPE_GAP - 10.0), &pipe));
    }

    #[test]
    fn test_pipe_out_of_horizontal_range() {
        // Pipe far to the right; vertical overlap alone is not a hit.
        let pipe = Pipe {
            x: BIRD_X + 200.0,
            gap_top: 300.0,
        };
        assert!(!bird_pipe_collision(&bird_at(0.0 + 10.0), &pipe));
    }

    #[test]
    fn test_bounds_check_uses_half_size() {
        let field_height = 640.0;
        assert!(!bird_out_of_bounds(&bird_at(320.0), field_height));
        // Center above the ground but the lower edge past it.
        assert!(bird_out_of_bounds(
            &bird_at(field_height - BIRD_SIZE / 2.0 + 1.0),
            field_height
        ));
        // Upper edge past the ceiling.
        assert!(bird_out_of_bounds(&bird_at(BIRD_SIZE / 2.0 - 1.0), field_height));
    }
}
