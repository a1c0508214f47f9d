//! Hit detection between characters and swords
//!
//! Both tests are plain rectangle overlap; no contact point or depth is
//! reported, the caller only needs to know whether to apply a hit.

use super::rect::weapon_rect;
use super::state::{Character, Hitbox};

/// Bodies of two characters overlap. Symmetric.
pub fn check_enemy_collision(a: &Character, b: &Character) -> bool {
    a.rect().overlaps(&b.rect())
}

/// The wielder's sword overlaps the victim's body
pub fn check_weapon_collision(wielder: &Character, sword: Hitbox, victim: &Character) -> bool {
    weapon_rect(wielder, sword).overlaps(&victim.rect())
}
