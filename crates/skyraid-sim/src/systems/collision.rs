//! Collision resolver: pairwise AABB tests between typed registry
//! buckets, with a reaction per interacting pair.
//!
//! Buckets are snapshotted before scanning so reactions can remove
//! entities mid-pass; every pair re-checks membership before testing.
//! Overlap is strict — edge-adjacent boxes do not collide.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::{EnemyInfo, Health, PickupItem, ShootState};
use skyraid_core::constants::*;
use skyraid_core::enums::{EntityKind, PickupKind};
use skyraid_core::events::GameEvent;
use skyraid_core::types::{Aabb, Position, Size};

use crate::animator::Animator;
use crate::registry::Registry;
use crate::world_setup;

/// Run all collision passes. Returns true when the player was defeated
/// this tick.
pub fn run(
    registry: &mut Registry,
    animator: &mut Animator,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) -> bool {
    bullets_vs_enemies(registry, animator, rng, score, events);

    let Some(player) = registry.of_kind(EntityKind::Player).first().copied() else {
        return false;
    };

    let mut defeated = player_vs_enemy_bullets(registry, events, player);
    player_vs_pickups(registry, events, player);
    // Ramming an enemy or a meteor defeats the player outright.
    defeated |= !scan(registry, player, EntityKind::Enemy, false).is_empty();
    defeated |= !scan(registry, player, EntityKind::Meteor, false).is_empty();
    defeated
}

/// Test `subject` against the `kind` bucket and collect the overlapping
/// entities, in bucket order. Stops at the first hit unless `check_all`
/// is set.
fn scan(registry: &Registry, subject: Entity, kind: EntityKind, check_all: bool) -> Vec<Entity> {
    let mut hits = Vec::new();
    if !registry.contains(subject) {
        return hits;
    }
    for target in registry.of_kind(kind) {
        if overlapping(registry, subject, *target) {
            hits.push(*target);
            if !check_all {
                break;
            }
        }
    }
    hits
}

/// Each player bullet against the enemy bucket, first match wins: a
/// bullet lands at most one hit per tick, on the first enemy in bucket
/// order it overlaps.
fn bullets_vs_enemies(
    registry: &mut Registry,
    animator: &mut Animator,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let bullets: Vec<Entity> = registry.of_kind(EntityKind::Bullet).to_vec();
    for bullet in bullets {
        for enemy in scan(registry, bullet, EntityKind::Enemy, false) {
            on_bullet_hit(registry, animator, rng, score, events, bullet, enemy);
        }
    }
}

fn on_bullet_hit(
    registry: &mut Registry,
    animator: &mut Animator,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    bullet: Entity,
    enemy: Entity,
) {
    let _ = registry.remove(bullet);

    let depleted = registry
        .world()
        .get::<&mut Health>(enemy)
        .map(|mut health| health.take_damage(BULLET_DAMAGE))
        .unwrap_or(false);
    if !depleted {
        return;
    }

    let info = registry.world().get::<&EnemyInfo>(enemy).map(|i| *i).ok();
    let pos = registry
        .world()
        .get::<&Position>(enemy)
        .map(|p| p.0)
        .unwrap_or_default();

    // Removal fires the spawner's and the group's observers; the next
    // wave may spawn synchronously inside this call.
    let _ = registry.remove(enemy);

    if let Some(info) = info {
        *score += info.score;
        events.push(GameEvent::EnemyDestroyed {
            archetype: info.archetype,
            score: info.score,
        });
    }
    world_setup::spawn_explosion(registry, animator, pos);
    if rng.gen_bool(PICKUP_DROP_CHANCE) {
        let kind = match rng.gen_range(0..3) {
            0 => PickupKind::Repair,
            1 => PickupKind::Weapon,
            _ => PickupKind::Shield,
        };
        world_setup::spawn_pickup(registry, pos, kind);
    }
}

/// The player against every enemy bullet (check-all: multiple bullets can
/// land in one tick). Shield absorbs hits before the player does.
fn player_vs_enemy_bullets(
    registry: &mut Registry,
    events: &mut Vec<GameEvent>,
    player: Entity,
) -> bool {
    let mut defeated = false;
    for bullet in scan(registry, player, EntityKind::EnemyBullet, true) {
        let _ = registry.remove(bullet);
        defeated |= damage_player(registry, events, player);
    }
    defeated
}

fn damage_player(registry: &mut Registry, events: &mut Vec<GameEvent>, player: Entity) -> bool {
    if let Some(shield) = registry.of_kind(EntityKind::Shield).first().copied() {
        let depleted = registry
            .world()
            .get::<&mut Health>(shield)
            .map(|mut health| health.take_damage(ENEMY_BULLET_DAMAGE))
            .unwrap_or(false);
        if depleted {
            let _ = registry.remove(shield);
            events.push(GameEvent::ShieldDown);
        }
        return false;
    }

    registry
        .world()
        .get::<&mut Health>(player)
        .map(|mut health| health.take_damage(ENEMY_BULLET_DAMAGE))
        .unwrap_or(false)
}

/// The player against pickups, first match wins.
fn player_vs_pickups(registry: &mut Registry, events: &mut Vec<GameEvent>, player: Entity) {
    for pickup in scan(registry, player, EntityKind::Pickup, false) {
        apply_pickup(registry, events, player, pickup);
        let _ = registry.remove(pickup);
    }
}

fn apply_pickup(registry: &mut Registry, events: &mut Vec<GameEvent>, player: Entity, pickup: Entity) {
    let Ok(kind) = registry.world().get::<&PickupItem>(pickup).map(|item| item.0) else {
        return;
    };
    match kind {
        PickupKind::Repair => {
            if let Ok(mut health) = registry.world().get::<&mut Health>(player) {
                health.heal(PICKUP_REPAIR_AMOUNT);
            }
        }
        PickupKind::Weapon => {
            if let Ok(mut shoot) = registry.world().get::<&mut ShootState>(player) {
                shoot.mode = shoot.mode.upgraded();
            }
        }
        PickupKind::Shield => {
            if let Some(shield) = registry.of_kind(EntityKind::Shield).first().copied() {
                if let Ok(mut health) = registry.world().get::<&mut Health>(shield) {
                    health.current = health.max;
                }
            } else {
                let player_pos = registry
                    .world()
                    .get::<&Position>(player)
                    .map(|p| p.0)
                    .unwrap_or_default();
                world_setup::spawn_shield(registry, player_pos);
            }
        }
    }
    events.push(GameEvent::PickupCollected { kind });
}

fn overlapping(registry: &Registry, a: Entity, b: Entity) -> bool {
    match (aabb_of(registry, a), aabb_of(registry, b)) {
        (Some(box_a), Some(box_b)) => box_a.overlaps(&box_b),
        _ => false,
    }
}

fn aabb_of(registry: &Registry, entity: Entity) -> Option<Aabb> {
    let world = registry.world();
    let pos = world.get::<&Position>(entity).ok()?;
    let size = world.get::<&Size>(entity).ok()?;
    Some(Aabb::from_center(pos.0, size.0))
}
