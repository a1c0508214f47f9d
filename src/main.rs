//! Swordfall headless driver
//!
//! Runs a scripted fight against a wave of enemies with in-memory animation
//! state machines and logs what happens. Usage: `swordfall [settings.json]`.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use swordfall::Settings;
use swordfall::anim::InputSpec;
use swordfall::anim::memory::MemoryMachine;
use swordfall::consts::SIM_DT;
use swordfall::sim::tick::inputs;
use swordfall::sim::{GameEvent, Movement, TickInput, World, tick};

const SEED: u64 = 0x5eed;
const WAVE_SIZE: usize = 6;
const MAX_TICKS: u32 = 60 * 60;

fn character_machine() -> MemoryMachine {
    MemoryMachine::new()
        .with_bool(inputs::WALKING)
        .with_trigger(inputs::ATTACK)
        .with_trigger(inputs::HIT)
        .with_trigger(inputs::DEATH)
}

/// Circle the arena and swing every few frames
fn scripted_input(tick_index: u32) -> TickInput {
    let phase = (tick_index / 90) % 4;
    let movement = match phase {
        0 => Movement {
            right: true,
            ..Default::default()
        },
        1 => Movement {
            down: true,
            ..Default::default()
        },
        2 => Movement {
            left: true,
            ..Default::default()
        },
        _ => Movement {
            up: true,
            ..Default::default()
        },
    };
    TickInput {
        movement,
        attack: tick_index % 6 == 0,
        sprint: phase % 2 == 0,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Swordfall (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let specs: Vec<InputSpec> = inputs::ALL.iter().map(|name| InputSpec::infer(*name)).collect();
    let mut rng = Pcg32::seed_from_u64(SEED);
    let mut world = World::new(settings);

    let hero_machine = character_machine();
    world.hero.bind_animation(&hero_machine, &specs);

    let mut enemy_machines = Vec::new();
    for id in world.spawn_wave(&mut rng, WAVE_SIZE) {
        let machine = character_machine();
        if let Some(enemy) = world.enemy_mut(id) {
            enemy.body.bind_animation(&machine, &specs);
        }
        enemy_machines.push((id, machine));
    }

    let mut kills = 0;
    for i in 0..MAX_TICKS {
        let events = tick(&mut world, &scripted_input(i), SIM_DT);
        for event in &events {
            match event {
                GameEvent::EnemyKilled { id } => {
                    kills += 1;
                    log::info!("Enemy {} down ({}/{})", id, kills, WAVE_SIZE);
                }
                GameEvent::HeroKilled { by } => log::info!("Hero fell to enemy {}", by),
                other => log::debug!("{:?}", other),
            }
        }
        if world.hero.is_dead || world.enemies.is_empty() {
            break;
        }
    }

    log::info!(
        "Finished after {} ticks: hero at ({:.1}, {:.1}) with {} hp, {} enemies left",
        world.time_ticks,
        world.hero.pos.x,
        world.hero.pos.y,
        world.hero.health,
        world.living_enemies()
    );
    log::info!(
        "Hero animation: {} swings, {} hits taken",
        hero_machine.fired_count(inputs::ATTACK),
        hero_machine.fired_count(inputs::HIT)
    );
    for (id, machine) in &enemy_machines {
        log::debug!(
            "Enemy {} animation: {} hits, {} deaths",
            id,
            machine.fired_count(inputs::HIT),
            machine.fired_count(inputs::DEATH)
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless driver is native only
}
