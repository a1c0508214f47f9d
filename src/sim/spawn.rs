//! Enemy spawn points
//!
//! Enemies appear on the edge of a square around the play area, pushed out
//! by a random margin so they walk in from off screen. The RNG is passed in;
//! seed a `Pcg32` for reproducible waves.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{SPAWN_OFFSET_MAX, SPAWN_OFFSET_MIN, SPAWN_SQUARE_SIZE};

/// Square (from the origin) plus the range of the outward margin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub square_size: f32,
    /// Margin is drawn from `offset_min..offset_max`
    pub offset_min: f32,
    pub offset_max: f32,
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self {
            square_size: SPAWN_SQUARE_SIZE,
            offset_min: SPAWN_OFFSET_MIN,
            offset_max: SPAWN_OFFSET_MAX,
        }
    }
}

/// A sampled point and the expanded square it lies on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub pos: Vec2,
    /// Expanded square lower corner (same on both axes)
    pub min: f32,
    /// Expanded square upper corner (same on both axes)
    pub max: f32,
}

impl SpawnPoint {
    /// True if the point sits exactly on one of the square's edges
    pub fn on_perimeter(&self) -> bool {
        let on_x_edge = self.pos.x == self.min || self.pos.x == self.max;
        let on_y_edge = self.pos.y == self.min || self.pos.y == self.max;
        on_x_edge || on_y_edge
    }
}

/// Pick a point on the perimeter of the randomly expanded square
///
/// Coin flip for horizontal vs vertical edge, coin flip for near vs far
/// edge, then uniform along that edge.
///
/// Negative or non-finite sizes in `region` are treated as zero.
pub fn random_spawn_point<R: Rng + ?Sized>(rng: &mut R, region: &SpawnRegion) -> SpawnPoint {
    let square_size = finite_non_negative(region.square_size);
    let offset_min = finite_non_negative(region.offset_min);
    let offset_max = finite_non_negative(region.offset_max);

    let offset = if offset_max > offset_min {
        rng.random_range(offset_min..offset_max)
    } else {
        offset_min
    };
    let min = -offset;
    let max = square_size + offset;

    let edge = if rng.random_bool(0.5) { min } else { max };
    let along = if (max - min).is_finite() {
        rng.random_range(min..=max)
    } else {
        min
    };

    let pos = if rng.random_bool(0.5) {
        // Top or bottom edge
        Vec2::new(along, edge)
    } else {
        // Left or right edge
        Vec2::new(edge, along)
    };

    SpawnPoint { pos, min, max }
}

fn finite_non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
