//! Combat tuning
//!
//! Loaded from a JSON file next to the game; any field left out keeps its
//! built-in value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::spawn::SpawnRegion;
use crate::sim::state::Hitbox;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Weapon ===
    /// Sword hitbox when facing up/down (swapped when facing sideways)
    pub sword_hitbox: Hitbox,
    /// Damage per sword hit
    pub sword_damage: i32,
    /// Knockback applied to whoever gets hit
    pub knockback_strength: f32,
    /// Let knockback push characters past the level edge
    pub allow_exceed_boundaries: bool,

    // === Hero ===
    /// Speed multiplier while sprinting
    pub boost: f32,
    /// Seconds of invulnerability after taking a hit
    pub hit_cooldown: f32,

    // === Enemies ===
    /// Damage an enemy deals on contact
    pub enemy_damage: i32,
    /// Seconds a dead enemy stays around (death animation) before removal
    pub death_linger: f32,

    // === Spawning ===
    pub square_size: f32,
    pub spawn_offset_min: f32,
    pub spawn_offset_max: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sword_hitbox: Hitbox::new(SWORD_WIDTH, SWORD_HEIGHT),
            sword_damage: 1,
            knockback_strength: 10.0,
            allow_exceed_boundaries: false,

            boost: 1.0,
            hit_cooldown: 0.5,

            enemy_damage: 1,
            death_linger: 1.0,

            square_size: SPAWN_SQUARE_SIZE,
            spawn_offset_min: SPAWN_OFFSET_MIN,
            spawn_offset_max: SPAWN_OFFSET_MAX,
        }
    }
}

impl Settings {
    /// Parse settings, rejecting spawn sizes that are negative or not finite
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), serde_json::Error> {
        for (name, value) in [
            ("square_size", self.square_size),
            ("spawn_offset_min", self.spawn_offset_min),
            ("spawn_offset_max", self.spawn_offset_max),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(serde::de::Error::custom(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn spawn_region(&self) -> SpawnRegion {
        SpawnRegion {
            square_size: self.square_size,
            offset_min: self.spawn_offset_min,
            offset_max: self.spawn_offset_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "knockback_strength": 25.0, "boost": 1.5 }"#).unwrap();
        assert_eq!(s.knockback_strength, 25.0);
        assert_eq!(s.boost, 1.5);
        assert_eq!(s.sword_hitbox, Hitbox::new(10.0, 30.0));
        assert!(!s.allow_exceed_boundaries);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = Settings::default();
        s.allow_exceed_boundaries = true;
        s.death_linger = 2.5;
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert!(back.allow_exceed_boundaries);
        assert_eq!(back.death_linger, 2.5);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "boost": "fast" }"#).is_err());
    }

    #[test]
    fn test_bad_spawn_sizes_rejected() {
        assert!(Settings::from_json(r#"{ "square_size": -5000.0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "spawn_offset_min": -1.0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "spawn_offset_max": 1e39 }"#).is_err());
        assert!(Settings::from_json(r#"{ "square_size": 0.0 }"#).is_ok());
    }

    #[test]
    fn test_load_bad_spawn_sizes_defaults() {
        let path = std::env::temp_dir().join(format!("swordfall_bad_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "square_size": -5000.0, "boost": 3.0 }"#).unwrap();
        let s = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(s.square_size, Settings::default().square_size);
        assert_eq!(s.boost, Settings::default().boost);
    }

    #[test]
    fn test_negative_sword_hitbox_clamped() {
        let s = Settings::from_json(r#"{ "sword_hitbox": { "width": -10.0, "height": 30.0 } }"#)
            .unwrap();
        assert_eq!(s.sword_hitbox, Hitbox::new(0.0, 30.0));
        assert!(s.sword_hitbox.width >= 0.0);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let s = Settings::load("/definitely/not/here/swordfall.json");
        assert_eq!(s.enemy_damage, Settings::default().enemy_damage);
    }

    #[test]
    fn test_spawn_region() {
        let region = Settings::default().spawn_region();
        assert_eq!(region, SpawnRegion::default());
    }
}
