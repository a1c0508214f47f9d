//! Swordfall - gameplay logic for a 2D sword-fighting game
//!
//! Core modules:
//! - `sim`: Movement, collision, knockback and spawning on plain character records
//! - `anim`: Narrow interface onto the external animation state machine
//! - `settings`: Data-driven combat tuning

pub mod anim;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Knockback vectors are divided by this before scaling by strength
    pub const KNOCKBACK_NORMALIZATION: f32 = 100.0;

    /// Hero defaults
    pub const HERO_SPEED: f32 = 300.0;
    pub const HERO_HITBOX: f32 = 20.0;
    pub const HERO_HEALTH: i32 = 10;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 120.0;
    pub const ENEMY_HITBOX: f32 = 20.0;
    pub const ENEMY_HEALTH: i32 = 3;

    /// Sword hitbox (width x height when facing up/down)
    pub const SWORD_WIDTH: f32 = 10.0;
    pub const SWORD_HEIGHT: f32 = 30.0;

    /// Spawn ring offset range around the spawn square
    pub const SPAWN_OFFSET_MIN: f32 = 200.0;
    pub const SPAWN_OFFSET_MAX: f32 = 1700.0;
    pub const SPAWN_SQUARE_SIZE: f32 = 1000.0;
}

/// Bearing angle (radians) from `from` toward `to`
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Unit vector for a bearing angle
#[inline]
pub fn heading(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_bearing_cardinals() {
        assert!(bearing(Vec2::ZERO, Vec2::new(10.0, 0.0)).abs() < 1e-6);
        assert!((bearing(Vec2::ZERO, Vec2::new(0.0, 10.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((bearing(Vec2::ZERO, Vec2::new(-10.0, 0.0)) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_heading_is_unit() {
        for i in 0..16 {
            let theta = i as f32 * PI / 8.0;
            assert!((heading(theta).length() - 1.0).abs() < 1e-6);
        }
    }
}
