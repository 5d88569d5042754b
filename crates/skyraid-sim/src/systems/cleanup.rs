//! Cleanup system: removes projectiles and pickups that left the play
//! area. Uses a pre-allocated buffer to avoid per-tick allocation.

use glam::Vec2;
use hecs::Entity;

use skyraid_core::constants::{OFFSCREEN_MARGIN, PLAY_AREA_HEIGHT, PLAY_AREA_WIDTH};
use skyraid_core::enums::EntityKind;
use skyraid_core::types::Position;

use crate::registry::Registry;

const CULLED_KINDS: [EntityKind; 4] = [
    EntityKind::Bullet,
    EntityKind::EnemyBullet,
    EntityKind::Pickup,
    EntityKind::Meteor,
];

pub fn run(registry: &mut Registry, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for kind in CULLED_KINDS {
        for entity in registry.of_kind(kind) {
            if let Ok(pos) = registry.world().get::<&Position>(*entity) {
                if offscreen(pos.0) {
                    despawn_buffer.push(*entity);
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = registry.remove(entity);
    }
}

fn offscreen(pos: Vec2) -> bool {
    pos.x < -OFFSCREEN_MARGIN
        || pos.x > PLAY_AREA_WIDTH + OFFSCREEN_MARGIN
        || pos.y < -OFFSCREEN_MARGIN
        || pos.y > PLAY_AREA_HEIGHT + OFFSCREEN_MARGIN
}
