//! Entity spawn factories.
//!
//! Creates the player, bullets, pickups, shields, explosions, and the
//! auxiliary driver entities with appropriate component bundles. All
//! spawning goes through the registry so membership and removal
//! observation stay consistent.

use glam::Vec2;
use hecs::Entity;

use skyraid_core::components::*;
use skyraid_core::constants::*;
use skyraid_core::enums::*;
use skyraid_core::errors::SimError;
use skyraid_core::path::Path;
use skyraid_core::types::{Position, Size, Velocity};

use crate::animator::Animator;
use crate::drivers::{GroupMembers, PathDriver, ShooterDriver, SweepDriver};
use crate::registry::Registry;

/// Spawn the player at the bottom center of the play area.
pub fn spawn_player(registry: &mut Registry) -> Entity {
    registry.spawn(
        EntityKind::Player,
        (
            Position::new(PLAY_AREA_WIDTH / 2.0, PLAY_AREA_HEIGHT * 0.9),
            Size::new(PLAYER_SIZE, PLAYER_SIZE),
            Velocity::default(),
            Health::full(PLAYER_MAX_HEALTH),
            ShootState::default(),
            Animation::new(PLAYER_FRAME_COUNT, PLAYER_FPS),
        ),
    )
}

/// Spawn the player-bullet pattern for the given shoot mode.
pub fn spawn_player_shots(registry: &mut Registry, origin: Vec2, mode: ShootMode) {
    let offsets: &[f32] = match mode {
        ShootMode::Single => &[0.0],
        ShootMode::Double => &[-SHOOT_SPREAD_X, SHOOT_SPREAD_X],
        ShootMode::Triple => &[-SHOOT_SPREAD_X, 0.0, SHOOT_SPREAD_X],
    };
    for offset in offsets {
        let _ = registry.spawn(
            EntityKind::Bullet,
            (
                Position(origin + Vec2::new(*offset, 0.0)),
                Size::new(BULLET_SIZE.0, BULLET_SIZE.1),
                Velocity::new(0.0, -BULLET_SPEED),
            ),
        );
    }
}

/// Spawn one enemy bullet with an explicit velocity.
pub fn spawn_enemy_bullet(registry: &mut Registry, origin: Vec2, velocity: Vec2) -> Entity {
    registry.spawn(
        EntityKind::EnemyBullet,
        (
            Position(origin),
            Size::new(ENEMY_BULLET_SIZE.0, ENEMY_BULLET_SIZE.1),
            Velocity(velocity),
        ),
    )
}

/// Spawn a pickup falling from `origin`.
pub fn spawn_pickup(registry: &mut Registry, origin: Vec2, kind: PickupKind) -> Entity {
    registry.spawn(
        EntityKind::Pickup,
        (
            Position(origin),
            Size::new(PICKUP_SIZE, PICKUP_SIZE),
            Velocity::new(0.0, PICKUP_FALL_SPEED),
            PickupItem(kind),
        ),
    )
}

/// Spawn a meteor falling straight down from above the play area.
pub fn spawn_meteor(registry: &mut Registry, x: f32) -> Entity {
    registry.spawn(
        EntityKind::Meteor,
        (
            Position::new(x, -METEOR_SIZE),
            Size::new(METEOR_SIZE, METEOR_SIZE),
            Velocity::new(0.0, METEOR_FALL_SPEED),
        ),
    )
}

/// Spawn the shield satellite tracking the player.
pub fn spawn_shield(registry: &mut Registry, player_pos: Vec2) -> Entity {
    registry.spawn(
        EntityKind::Shield,
        (
            Position(player_pos),
            Size::new(SHIELD_SIZE, SHIELD_SIZE),
            Health::full(SHIELD_MAX_HEALTH),
        ),
    )
}

/// Spawn a one-shot explosion at `origin`; it removes itself once the
/// animation wraps.
pub fn spawn_explosion(registry: &mut Registry, animator: &mut Animator, origin: Vec2) -> Entity {
    let explosion = registry.spawn(
        EntityKind::Explosion,
        (
            Position(origin),
            Size::new(EXPLOSION_SIZE, EXPLOSION_SIZE),
            Animation::new(EXPLOSION_FRAME_COUNT, EXPLOSION_FPS),
        ),
    );
    animator.register_one_shot(
        registry,
        explosion,
        Box::new(|reg, entity| {
            if reg.contains(entity) {
                let _ = reg.remove(entity);
            }
        }),
    );
    explosion
}

/// Attach a path driver to `child`. The driver repositions the child each
/// tick and observes the child's removal so it never updates a dangling
/// handle.
pub fn attach_path_driver(
    registry: &mut Registry,
    child: Entity,
    path: Path,
    duration_secs: f32,
    looping: bool,
) -> Result<Entity, SimError> {
    if duration_secs <= 0.0 {
        return Err(SimError::InvalidParameter(
            "path driver requires a positive duration",
        ));
    }
    if !registry.contains(child) {
        return Err(SimError::NotRegistered);
    }

    let driver = registry.spawn(
        EntityKind::Driver,
        (PathDriver {
            child,
            child_obs: None,
            path,
            duration_secs,
            t: 0.0,
            direction: 1.0,
            looping,
        },),
    );
    let observer = registry.observe_removal(child, move |reg, _removed| {
        if reg.contains(driver) {
            let _ = reg.remove(driver);
        }
    })?;
    if let Ok(mut state) = registry.world().get::<&mut PathDriver>(driver) {
        state.child_obs = Some(observer);
    }
    Ok(driver)
}

/// Attach a sweep driver to `child` (usually a formation group).
pub fn attach_sweep_driver(
    registry: &mut Registry,
    child: Entity,
    speed_x: f32,
    step_y: f32,
) -> Result<Entity, SimError> {
    if speed_x <= 0.0 {
        return Err(SimError::InvalidParameter(
            "sweep driver requires a positive horizontal speed",
        ));
    }
    if !registry.contains(child) {
        return Err(SimError::NotRegistered);
    }

    let driver = registry.spawn(
        EntityKind::Driver,
        (SweepDriver {
            child,
            speed_x,
            step_y,
            heading: 1.0,
        },),
    );
    registry.observe_removal(child, move |reg, _removed| {
        if reg.contains(driver) {
            let _ = reg.remove(driver);
        }
    })?;
    Ok(driver)
}

/// Attach an interval shooter to `child`.
pub fn attach_shooter(
    registry: &mut Registry,
    child: Entity,
    interval_secs: f32,
    aimed: bool,
) -> Result<Entity, SimError> {
    if interval_secs <= 0.0 {
        return Err(SimError::InvalidParameter(
            "shooter driver requires a positive interval",
        ));
    }
    if !registry.contains(child) {
        return Err(SimError::NotRegistered);
    }

    let driver = registry.spawn(
        EntityKind::Driver,
        (ShooterDriver {
            child,
            interval_secs,
            accumulator: 0.0,
            aimed,
        },),
    );
    registry.observe_removal(child, move |reg, _removed| {
        if reg.contains(driver) {
            let _ = reg.remove(driver);
        }
    })?;
    Ok(driver)
}

/// Spawn a formation group around already-registered members. The group's
/// position is the member centroid; members get offsets from it and the
/// group observes each member so it can dissolve once the last one is
/// removed.
pub fn spawn_group(registry: &mut Registry, members: &[Entity]) -> Result<Entity, SimError> {
    if members.is_empty() {
        return Err(SimError::InvalidParameter(
            "group requires at least one member",
        ));
    }

    let mut positions = Vec::with_capacity(members.len());
    let mut member_size = Vec2::splat(ENEMY_SIZE);
    for member in members {
        if !registry.contains(*member) {
            return Err(SimError::NotRegistered);
        }
        let Ok(pos) = registry.world().get::<&Position>(*member) else {
            return Err(SimError::InvalidParameter(
                "group members need a position",
            ));
        };
        if let Ok(size) = registry.world().get::<&Size>(*member) {
            member_size = size.0;
        }
        positions.push(pos.0);
    }

    let centroid = positions.iter().sum::<Vec2>() / positions.len() as f32;
    let offsets: Vec<Vec2> = positions.iter().map(|pos| *pos - centroid).collect();
    let extent = GroupMembers::extent(&offsets, member_size);

    let group = registry.spawn(
        EntityKind::Group,
        (
            Position(centroid),
            Size(extent),
            GroupMembers {
                members: members.to_vec(),
            },
        ),
    );

    for (member, offset) in members.iter().zip(offsets) {
        let _ = registry.world_mut().insert_one(*member, GroupOffset(offset));
        registry.observe_removal(*member, move |reg, removed| {
            let now_empty = match reg.world().get::<&mut GroupMembers>(group) {
                Ok(mut state) => {
                    state.members.retain(|m| *m != removed);
                    state.members.is_empty()
                }
                Err(_) => return,
            };
            if now_empty && reg.contains(group) {
                let _ = reg.remove(group);
            }
        })?;
    }
    Ok(group)
}
