//! Character records and level data
//!
//! The game loop owns these; sim functions only read and mutate fields in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, character_rect};
use crate::anim::{InputRefs, InputSpec, StateMachine};

/// Cardinal facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Down => "down",
            Orientation::Left => "left",
            Orientation::Right => "right",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Orientation::Up),
            "down" => Some(Orientation::Down),
            "left" => Some(Orientation::Left),
            "right" => Some(Orientation::Right),
            _ => None,
        }
    }

    /// Facing for a bearing angle (y grows downward), dominant axis wins
    pub fn from_bearing(theta: f32) -> Self {
        let (dx, dy) = (theta.cos(), theta.sin());
        if dx.abs() >= dy.abs() {
            if dx >= 0.0 { Orientation::Right } else { Orientation::Left }
        } else if dy >= 0.0 {
            Orientation::Down
        } else {
            Orientation::Up
        }
    }
}

/// Movement intent, one flag per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Movement {
    /// An X flag and a Y flag are both set
    pub fn is_diagonal(&self) -> bool {
        (self.up || self.down) && (self.left || self.right)
    }

    pub fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Collision extent centered on its owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHitbox")]
pub struct Hitbox {
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

/// Hitbox as written in data files, before negative sizes are clamped
#[derive(Deserialize)]
struct RawHitbox {
    width: f32,
    height: f32,
}

impl From<RawHitbox> for Hitbox {
    fn from(raw: RawHitbox) -> Self {
        Hitbox::new(raw.width, raw.height)
    }
}

/// Play area limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelBoundaries {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl LevelBoundaries {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Square play area from the origin
    pub fn square(size: f32) -> Self {
        Self::new(0.0, size, 0.0, size)
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }
}

/// A hero or enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub pos: Vec2,
    pub speed: f32,
    pub hitbox: Hitbox,
    pub movement: Movement,
    pub orientation: Orientation,
    pub health: i32,
    pub max_health: i32,
    pub is_dead: bool,
    /// Seconds since the last hit landed on this character
    pub time_since_last_hit: f32,
    /// Seconds since death (0 while alive)
    pub time_since_death: f32,
    /// Resolved animation inputs (empty when headless)
    #[serde(skip)]
    pub inputs: InputRefs,
}

impl Character {
    pub fn new(pos: Vec2, speed: f32, hitbox: Hitbox) -> Self {
        Self {
            pos,
            speed,
            hitbox,
            movement: Movement::default(),
            orientation: Orientation::default(),
            health: 1,
            max_health: 1,
            is_dead: false,
            time_since_last_hit: f32::MAX,
            time_since_death: 0.0,
            inputs: InputRefs::default(),
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self.max_health = health;
        self
    }

    /// Resolve this character's animation inputs against its state machine
    pub fn bind_animation(&mut self, machine: &dyn StateMachine, specs: &[InputSpec]) {
        self.inputs = InputRefs::resolve(machine, specs);
    }

    pub fn rect(&self) -> Rect {
        character_rect(self.pos, self.hitbox)
    }

    /// True once the invulnerability window after the last hit has passed
    pub fn can_be_hit(&self, cooldown: f32) -> bool {
        !self.is_dead && self.time_since_last_hit >= cooldown
    }

    /// Apply damage and reset the hit timer. Returns true if this killed.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.is_dead {
            return false;
        }
        self.health -= amount;
        self.time_since_last_hit = 0.0;
        if self.health <= 0 {
            self.health = 0;
            self.is_dead = true;
            self.time_since_death = 0.0;
            self.movement = Movement::default();
            return true;
        }
        false
    }

    pub fn advance_timers(&mut self, dt: f32) {
        self.time_since_last_hit += dt;
        if self.is_dead {
            self.time_since_death += dt;
        }
    }
}
