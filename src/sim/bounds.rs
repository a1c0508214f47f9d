//! Level boundary checks and knockback
//!
//! The clamp and the out-of-bounds test share one priority order (max x,
//! min x, max y, min y) and stop at the first violated edge, so a character
//! outside a corner is corrected on x only. Repeated calls finish the job.

use serde::{Deserialize, Serialize};

use super::state::{Character, LevelBoundaries};
use crate::consts::KNOCKBACK_NORMALIZATION;

/// Which axis the out-of-bounds test flagged. At most one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutOfBounds {
    pub x: bool,
    pub y: bool,
}

impl OutOfBounds {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Pull the character back onto the first boundary it has crossed
pub fn clamp_to_boundaries(character: &mut Character, bounds: &LevelBoundaries) {
    let pos = &mut character.pos;
    if pos.x > bounds.max_x {
        pos.x = bounds.max_x;
    } else if pos.x < bounds.min_x {
        pos.x = bounds.min_x;
    } else if pos.y > bounds.max_y {
        pos.y = bounds.max_y;
    } else if pos.y < bounds.min_y {
        pos.y = bounds.min_y;
    }
}

pub fn out_of_bounds(character: &Character, bounds: &LevelBoundaries) -> OutOfBounds {
    let pos = character.pos;
    if pos.x > bounds.max_x || pos.x < bounds.min_x {
        OutOfBounds { x: true, y: false }
    } else if pos.y > bounds.max_y || pos.y < bounds.min_y {
        OutOfBounds { x: false, y: true }
    } else {
        OutOfBounds::default()
    }
}

/// Push `victim` away from `offender`
///
/// The push vector runs between the two rectangles' top-left corners, not
/// their centers, so differently sized characters are pushed off-axis.
/// With `bounds` given the victim is clamped back afterwards.
pub fn apply_knockback(
    victim: &mut Character,
    offender: &Character,
    strength: f32,
    bounds: Option<&LevelBoundaries>,
) {
    let push = (victim.rect().origin() - offender.rect().origin()) / KNOCKBACK_NORMALIZATION;
    victim.pos += push * strength;
    if let Some(bounds) = bounds {
        clamp_to_boundaries(victim, bounds);
    }
}
