//! Kinematic integration: position += velocity * dt.
//!
//! Applies to every entity carrying both components — bullets and
//! pickups; enemies are positioned by drivers and carry no velocity.

use skyraid_core::types::{Position, Velocity};

use crate::registry::Registry;

pub fn run(registry: &mut Registry, dt: f32) {
    for (_entity, (pos, vel)) in registry.world_mut().query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }
}
