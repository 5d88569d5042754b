//! Movement engine: advances path and sweep drivers, then re-syncs
//! formation members to their groups.
//!
//! Runs before collision resolution so collisions see this tick's
//! positions.

use hecs::Entity;

use skyraid_core::components::GroupOffset;
use skyraid_core::constants::PLAY_AREA_WIDTH;
use skyraid_core::enums::EntityKind;
use skyraid_core::types::{Position, Size};

use crate::drivers::{GroupMembers, PathDriver, SweepDriver};
use crate::registry::Registry;

/// Advance every driver by `dt`. Non-looping path drivers that clamp this
/// tick are collected into the pre-allocated `done_buffer` and removed
/// after the sweep, in the same tick.
pub fn run(registry: &mut Registry, done_buffer: &mut Vec<Entity>, dt: f32) {
    done_buffer.clear();

    let drivers: Vec<Entity> = registry.of_kind(EntityKind::Driver).to_vec();
    for driver in drivers {
        advance_path(registry, driver, dt, done_buffer);
        advance_sweep(registry, driver, dt);
    }

    for driver in done_buffer.drain(..) {
        remove_path_driver(registry, driver);
    }

    sync_groups(registry);
}

/// Remove a finished path driver, dropping its subscription on the child
/// first so the child's eventual removal does not fire into a dead
/// driver.
fn remove_path_driver(registry: &mut Registry, driver: Entity) {
    let detach = registry
        .world()
        .get::<&PathDriver>(driver)
        .ok()
        .map(|state| (state.child, state.child_obs));
    if let Some((child, Some(observer))) = detach {
        registry.ignore_removal(child, observer);
    }
    let _ = registry.remove(driver);
}

fn advance_path(registry: &Registry, driver: Entity, dt: f32, done_buffer: &mut Vec<Entity>) {
    let world = registry.world();
    let Ok(mut state) = world.get::<&mut PathDriver>(driver) else {
        return;
    };

    state.t += (dt / state.duration_secs) * state.direction;

    // Clamp is direction-dependent: a forward driver finishes at t = 1, a
    // backward one at t = 0. A zero-delta tick on a fresh driver sitting
    // at t = 0 is not a completion.
    let mut clamped = false;
    if state.direction > 0.0 && state.t >= 1.0 {
        state.t = 1.0;
        clamped = true;
    } else if state.direction < 0.0 && state.t <= 0.0 {
        state.t = 0.0;
        clamped = true;
    }

    // Reposition the child at the (possibly clamped) t before any
    // termination decision, so a finishing driver still places the child
    // at the path's end this tick.
    let target = state.path.at(state.t);
    if let Ok(mut pos) = world.get::<&mut Position>(state.child) {
        pos.0 = target;
    }

    if clamped {
        if state.looping {
            state.direction = -state.direction;
        } else {
            done_buffer.push(driver);
        }
    }
}

fn advance_sweep(registry: &Registry, driver: Entity, dt: f32) {
    let world = registry.world();
    let Ok(mut state) = world.get::<&mut SweepDriver>(driver) else {
        return;
    };
    let Ok(mut pos) = world.get::<&mut Position>(state.child) else {
        return;
    };
    let half_width = world
        .get::<&Size>(state.child)
        .map(|size| size.0.x / 2.0)
        .unwrap_or(0.0);

    let next_x = pos.0.x + state.speed_x * state.heading * dt;
    if next_x - half_width < 0.0 || next_x + half_width > PLAY_AREA_WIDTH {
        // The child's box would cross a bound: reverse, step down, and
        // stay flush against the bound this tick.
        state.heading = -state.heading;
        // A box wider than the play area has no in-bounds x; park it at the
        // center rather than clamping with an inverted range.
        pos.0.x = if half_width * 2.0 <= PLAY_AREA_WIDTH {
            next_x.clamp(half_width, PLAY_AREA_WIDTH - half_width)
        } else {
            PLAY_AREA_WIDTH / 2.0
        };
        pos.0.y += state.step_y;
    } else {
        pos.0.x = next_x;
    }
}

/// Reposition every formation member at its group's position plus its
/// offset.
pub fn sync_groups(registry: &Registry) {
    let world = registry.world();
    for group in registry.of_kind(EntityKind::Group) {
        let Ok(members) = world.get::<&GroupMembers>(*group) else {
            continue;
        };
        let Ok(origin) = world.get::<&Position>(*group) else {
            continue;
        };
        for member in &members.members {
            let Ok(offset) = world.get::<&GroupOffset>(*member) else {
                continue;
            };
            if let Ok(mut pos) = world.get::<&mut Position>(*member) {
                pos.0 = origin.0 + offset.0;
            }
        }
    }
}
