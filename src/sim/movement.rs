//! Per-frame position integration
//!
//! Two integrators: flag-driven movement clamped to the level, and straight
//! line pursuit of a target point.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use super::state::{Character, LevelBoundaries, Orientation};
use crate::{bearing, heading};

/// Advance a character by its movement flags, clamped to the level
///
/// Each flag is applied on its own, in the order up, down, left, right: a
/// step that would cross its boundary lands exactly on it instead. Opposing
/// flags are not cancelled out, so up+down moves up then back down (and a
/// clamp on one leg carries into the next).
///
/// Diagonal steps are scaled by 1/√2 so the total displacement matches a
/// single-axis step. `boost` multiplies the step (sprint).
pub fn move_character(
    character: &mut Character,
    elapsed: f32,
    bounds: &LevelBoundaries,
    boost: Option<f32>,
) {
    let mut step = character.speed * elapsed;
    if character.movement.is_diagonal() {
        step *= FRAC_1_SQRT_2;
    }
    if let Some(boost) = boost {
        step *= boost;
    }

    let movement = character.movement;
    let pos = &mut character.pos;

    if movement.up {
        if pos.y - step >= bounds.min_y {
            pos.y -= step;
        } else {
            pos.y = bounds.min_y;
        }
    }
    if movement.down {
        if pos.y + step <= bounds.max_y {
            pos.y += step;
        } else {
            pos.y = bounds.max_y;
        }
    }
    if movement.left {
        if pos.x - step >= bounds.min_x {
            pos.x -= step;
        } else {
            pos.x = bounds.min_x;
        }
    }
    if movement.right {
        if pos.x + step <= bounds.max_x {
            pos.x += step;
        } else {
            pos.x = bounds.max_x;
        }
    }
}

/// Move a living character straight toward `target` at its own speed
///
/// No boundary clamping. Facing is updated to the dominant axis of travel.
pub fn move_toward(character: &mut Character, target: Vec2, elapsed: f32) {
    if character.is_dead {
        return;
    }
    let theta = bearing(character.pos, target);
    character.pos += heading(theta) * character.speed * elapsed;
    character.orientation = Orientation::from_bearing(theta);
}
