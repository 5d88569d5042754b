//! Shooter drivers: interval-based enemy fire.

use glam::Vec2;
use hecs::Entity;

use skyraid_core::constants::ENEMY_BULLET_SPEED;
use skyraid_core::enums::EntityKind;
use skyraid_core::types::Position;

use crate::drivers::ShooterDriver;
use crate::registry::Registry;
use crate::world_setup;

pub fn run(registry: &mut Registry, dt: f32) {
    let player_pos = registry
        .of_kind(EntityKind::Player)
        .first()
        .and_then(|player| registry.world().get::<&Position>(*player).ok().map(|p| p.0));

    let drivers: Vec<Entity> = registry.of_kind(EntityKind::Driver).to_vec();
    for driver in drivers {
        let shot = {
            let world = registry.world();
            let Ok(mut state) = world.get::<&mut ShooterDriver>(driver) else {
                continue;
            };
            if !registry.contains(state.child) {
                continue;
            }
            state.accumulator += dt;
            if state.accumulator >= state.interval_secs {
                state.accumulator -= state.interval_secs;
                world
                    .get::<&Position>(state.child)
                    .ok()
                    .map(|pos| (pos.0, state.aimed))
            } else {
                None
            }
        };

        if let Some((origin, aimed)) = shot {
            let direction = match (aimed, player_pos) {
                (true, Some(target)) => (target - origin).normalize_or_zero(),
                _ => Vec2::ZERO,
            };
            let velocity = if direction == Vec2::ZERO {
                Vec2::new(0.0, ENEMY_BULLET_SPEED)
            } else {
                direction * ENEMY_BULLET_SPEED
            };
            world_setup::spawn_enemy_bullet(registry, origin, velocity);
        }
    }
}
