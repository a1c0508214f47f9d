//! Per-frame driver
//!
//! Runs the helpers in frame order: hero movement, enemy pursuit, contact
//! hits, sword hits, then timers and cleanup.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::apply_knockback;
use super::collision::{check_enemy_collision, check_weapon_collision};
use super::movement::{move_character, move_toward};
use super::spawn::random_spawn_point;
use super::state::{Character, Hitbox, LevelBoundaries, Movement, Orientation};
use crate::Settings;
use crate::consts::*;

/// Animation input names the driver pokes
pub mod inputs {
    pub const WALKING: &str = "walking";
    pub const ATTACK: &str = "attack";
    pub const HIT: &str = "hit";
    pub const DEATH: &str = "death";

    pub const ALL: [&str; 4] = [WALKING, ATTACK, HIT, DEATH];
}

/// Player commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub movement: Movement,
    /// Swing the sword this frame
    pub attack: bool,
    /// Apply the sprint boost
    pub sprint: bool,
}

/// Things that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    HeroHit { by: u32, health: i32 },
    HeroKilled { by: u32 },
    EnemyHit { id: u32, health: i32 },
    EnemyKilled { id: u32 },
    EnemyRemoved { id: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub body: Character,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub hero: Character,
    /// Sorted by id
    pub enemies: Vec<Enemy>,
    pub boundaries: LevelBoundaries,
    pub settings: Settings,
    pub time_ticks: u64,
    next_id: u32,
}

impl World {
    /// Hero in the middle of a square level
    pub fn new(settings: Settings) -> Self {
        let size = settings.square_size;
        let hero = Character::new(
            Vec2::splat(size / 2.0),
            HERO_SPEED,
            Hitbox::square(HERO_HITBOX),
        )
        .with_health(HERO_HEALTH);
        Self {
            hero,
            enemies: Vec::new(),
            boundaries: LevelBoundaries::square(size),
            settings,
            time_ticks: 0,
            next_id: 1,
        }
    }

    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_enemy(&mut self, body: Character) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy { id, body });
        id
    }

    /// Spawn an enemy on the spawn ring
    pub fn spawn_enemy<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let point = random_spawn_point(rng, &self.settings.spawn_region());
        let body = Character::new(point.pos, ENEMY_SPEED, Hitbox::square(ENEMY_HITBOX))
            .with_health(ENEMY_HEALTH);
        let id = self.add_enemy(body);
        log::debug!("Spawned enemy {} at ({:.0}, {:.0})", id, point.pos.x, point.pos.y);
        id
    }

    pub fn spawn_wave<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> Vec<u32> {
        let ids: Vec<u32> = (0..count).map(|_| self.spawn_enemy(rng)).collect();
        log::info!("Wave of {} enemies spawned", count);
        ids
    }

    pub fn enemy(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: u32) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| !e.body.is_dead).count()
    }
}

/// Facing from movement flags; later flags in up, down, left, right order win
fn facing_for(movement: &Movement, current: Orientation) -> Orientation {
    let mut facing = current;
    if movement.up {
        facing = Orientation::Up;
    }
    if movement.down {
        facing = Orientation::Down;
    }
    if movement.left {
        facing = Orientation::Left;
    }
    if movement.right {
        facing = Orientation::Right;
    }
    facing
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.time_ticks += 1;

    let World {
        hero,
        enemies,
        boundaries,
        settings,
        ..
    } = world;
    let boundaries: &LevelBoundaries = boundaries;
    let settings: &Settings = settings;
    let clamp = if settings.allow_exceed_boundaries {
        None
    } else {
        Some(boundaries)
    };

    // Hero movement
    if !hero.is_dead {
        hero.movement = input.movement;
        hero.orientation = facing_for(&input.movement, hero.orientation);
        let boost = input.sprint.then_some(settings.boost);
        move_character(hero, dt, boundaries, boost);
        hero.inputs.set_bool(inputs::WALKING, hero.movement.is_moving());
        if input.attack {
            hero.inputs.fire(inputs::ATTACK);
        }
    }

    // Enemies close in
    for enemy in enemies.iter_mut() {
        move_toward(&mut enemy.body, hero.pos, dt);
    }

    // Contact damage
    for enemy in enemies.iter().filter(|e| !e.body.is_dead) {
        if !hero.can_be_hit(settings.hit_cooldown) || !check_enemy_collision(hero, &enemy.body) {
            continue;
        }
        let killed = hero.take_damage(settings.enemy_damage);
        apply_knockback(hero, &enemy.body, settings.knockback_strength, clamp);
        if killed {
            hero.inputs.fire(inputs::DEATH);
            log::info!("Hero killed by enemy {}", enemy.id);
            events.push(GameEvent::HeroKilled { by: enemy.id });
        } else {
            hero.inputs.fire(inputs::HIT);
            log::debug!("Hero hit by enemy {} ({} hp left)", enemy.id, hero.health);
            events.push(GameEvent::HeroHit {
                by: enemy.id,
                health: hero.health,
            });
        }
    }

    // Sword hits
    if input.attack && !hero.is_dead {
        for enemy in enemies.iter_mut() {
            let body = &mut enemy.body;
            if !body.can_be_hit(settings.hit_cooldown)
                || !check_weapon_collision(hero, settings.sword_hitbox, body)
            {
                continue;
            }
            let killed = body.take_damage(settings.sword_damage);
            apply_knockback(body, hero, settings.knockback_strength, clamp);
            if killed {
                body.inputs.fire(inputs::DEATH);
                log::debug!("Enemy {} killed", enemy.id);
                events.push(GameEvent::EnemyKilled { id: enemy.id });
            } else {
                body.inputs.fire(inputs::HIT);
                events.push(GameEvent::EnemyHit {
                    id: enemy.id,
                    health: body.health,
                });
            }
        }
    }

    // Timers and cleanup
    hero.advance_timers(dt);
    for enemy in enemies.iter_mut() {
        enemy.body.advance_timers(dt);
    }
    let linger = settings.death_linger;
    enemies.retain(|e| {
        let gone = e.body.is_dead && e.body.time_since_death >= linger;
        if gone {
            events.push(GameEvent::EnemyRemoved { id: e.id });
        }
        !gone
    });

    events
}
