//! Axis-aligned rectangles for characters and weapons
//!
//! Rectangles are derived on demand from a character's position and hitbox;
//! nothing stores them. `x`/`y` is the top-left corner, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Character, Hitbox, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap: touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Rectangle of `hitbox` centered on `pos`
#[inline]
pub fn character_rect(pos: Vec2, hitbox: Hitbox) -> Rect {
    Rect::new(
        pos.x - hitbox.width / 2.0,
        pos.y - hitbox.height / 2.0,
        hitbox.width,
        hitbox.height,
    )
}

/// Sword rectangle for a wielder facing `orientation`
///
/// The sword sits just outside the wielder's box on the facing side. Facing
/// up or down it is `sword.width` wide and `sword.height` tall; facing left
/// or right the two are swapped so the blade always points away.
pub fn weapon_rect_at(pos: Vec2, hitbox: Hitbox, orientation: Orientation, sword: Hitbox) -> Rect {
    let half_w = hitbox.width / 2.0;
    let half_h = hitbox.height / 2.0;
    match orientation {
        Orientation::Down => Rect::new(
            pos.x - half_w - sword.width,
            pos.y + half_h,
            sword.width,
            sword.height,
        ),
        Orientation::Up => Rect::new(
            pos.x + half_w,
            pos.y - half_h - sword.height,
            sword.width,
            sword.height,
        ),
        Orientation::Left => Rect::new(
            pos.x - half_w - sword.height,
            pos.y - half_h,
            sword.height,
            sword.width,
        ),
        Orientation::Right => Rect::new(
            pos.x + half_w,
            pos.y + half_h - sword.width,
            sword.height,
            sword.width,
        ),
    }
}

pub fn weapon_rect(wielder: &Character, sword: Hitbox) -> Rect {
    weapon_rect_at(wielder.pos, wielder.hitbox, wielder.orientation, sword)
}

/// Same as [`weapon_rect_at`] for an orientation name coming from outside;
/// unknown names give [`Rect::ZERO`].
pub fn weapon_rect_for_name(pos: Vec2, hitbox: Hitbox, orientation: &str, sword: Hitbox) -> Rect {
    match Orientation::from_str(orientation) {
        Some(orientation) => weapon_rect_at(pos, hitbox, orientation, sword),
        None => Rect::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SWORD: Hitbox = Hitbox {
        width: 10.0,
        height: 30.0,
    };

    fn hero_at(x: f32, y: f32) -> (Vec2, Hitbox) {
        (Vec2::new(x, y), Hitbox::square(20.0))
    }

    #[test]
    fn test_character_rect() {
        let r = character_rect(Vec2::new(100.0, 100.0), Hitbox::new(20.0, 40.0));
        assert_eq!(r, Rect::new(90.0, 80.0, 20.0, 40.0));
        assert_eq!(r.center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_weapon_rect_down() {
        let (pos, hitbox) = hero_at(100.0, 100.0);
        let r = weapon_rect_at(pos, hitbox, Orientation::Down, SWORD);
        assert_eq!(r, Rect::new(80.0, 110.0, 10.0, 30.0));
    }

    #[test]
    fn test_weapon_rect_up() {
        let (pos, hitbox) = hero_at(100.0, 100.0);
        let r = weapon_rect_at(pos, hitbox, Orientation::Up, SWORD);
        assert_eq!(r, Rect::new(110.0, 60.0, 10.0, 30.0));
    }

    #[test]
    fn test_weapon_rect_horizontal_is_wider() {
        let (pos, hitbox) = hero_at(100.0, 100.0);
        let left = weapon_rect_at(pos, hitbox, Orientation::Left, SWORD);
        let right = weapon_rect_at(pos, hitbox, Orientation::Right, SWORD);
        assert_eq!(left, Rect::new(60.0, 90.0, 30.0, 10.0));
        assert_eq!(right, Rect::new(110.0, 100.0, 30.0, 10.0));
        assert!(left.width > left.height);
        assert!(right.width > right.height);
    }

    #[test]
    fn test_weapon_rect_outside_wielder() {
        let (pos, hitbox) = hero_at(100.0, 100.0);
        let body = character_rect(pos, hitbox);
        for o in [
            Orientation::Up,
            Orientation::Down,
            Orientation::Left,
            Orientation::Right,
        ] {
            assert!(!weapon_rect_at(pos, hitbox, o, SWORD).overlaps(&body), "{:?}", o);
        }
    }

    #[test]
    fn test_weapon_rect_unknown_name() {
        let (pos, hitbox) = hero_at(100.0, 100.0);
        assert_eq!(weapon_rect_for_name(pos, hitbox, "diagonal", SWORD), Rect::ZERO);
        assert_eq!(
            weapon_rect_for_name(pos, hitbox, "down", SWORD),
            Rect::new(80.0, 110.0, 10.0, 30.0)
        );
    }

    #[test]
    fn test_overlap_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Touching edges
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Overlapping by a sliver
        assert!(a.overlaps(&Rect::new(9.9, 9.9, 10.0, 10.0)));
        // Containment
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 1.0, 1.0)));
    }

    proptest! {
        #[test]
        fn prop_character_rect_centered(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 0.0f32..200.0,
            h in 0.0f32..200.0,
        ) {
            let r = character_rect(Vec2::new(x, y), Hitbox::new(w, h));
            prop_assert!((r.x + r.width / 2.0 - x).abs() < 1e-3);
            prop_assert!((r.y + r.height / 2.0 - y).abs() < 1e-3);
        }
    }
}
