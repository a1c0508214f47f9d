//! Gameplay logic
//!
//! Plain functions over `Character` records owned by the game loop:
//! - No rendering or platform dependencies
//! - Randomness only through an RNG passed in by the caller
//! - Everything runs to completion within one call on one thread

pub mod bounds;
pub mod collision;
pub mod movement;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bounds::{OutOfBounds, apply_knockback, clamp_to_boundaries, out_of_bounds};
pub use collision::{check_enemy_collision, check_weapon_collision};
pub use movement::{move_character, move_toward};
pub use rect::{Rect, character_rect, weapon_rect, weapon_rect_at, weapon_rect_for_name};
pub use spawn::{SpawnPoint, SpawnRegion, random_spawn_point};
pub use state::{Character, Hitbox, LevelBoundaries, Movement, Orientation};
pub use tick::{Enemy, GameEvent, TickInput, World, tick};
