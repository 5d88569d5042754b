//! Frame-driven sprite-animation clock.
//!
//! Entities register as looping (repeat forever) or one-shot (run once,
//! then invoke a completion callback). The per-entity frame state lives in
//! the [`Animation`] component; the animator only tracks which entities to
//! advance and what to do when a one-shot wraps.

use hecs::Entity;

use skyraid_core::components::Animation;

use crate::registry::Registry;

/// Invoked once when a one-shot animation wraps past its last frame.
pub type CompletionCallback = Box<dyn FnMut(&mut Registry, Entity)>;

#[derive(Default)]
pub struct Animator {
    looping: Vec<Entity>,
    one_shot: Vec<(Entity, CompletionCallback)>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a looping entity. No-op if the entity is already animated
    /// in either table; resets the fractional accumulator on registration.
    pub fn register_loop(&mut self, registry: &Registry, entity: Entity) {
        if self.is_registered(entity) {
            return;
        }
        if let Ok(mut anim) = registry.world().get::<&mut Animation>(entity) {
            anim.internal = 0.0;
        } else {
            return;
        }
        self.looping.push(entity);
    }

    /// Register a one-shot entity with its completion callback. Same
    /// at-most-one-table rule as `register_loop`.
    pub fn register_one_shot(
        &mut self,
        registry: &Registry,
        entity: Entity,
        callback: CompletionCallback,
    ) {
        if self.is_registered(entity) {
            return;
        }
        if let Ok(mut anim) = registry.world().get::<&mut Animation>(entity) {
            anim.internal = 0.0;
        } else {
            return;
        }
        self.one_shot.push((entity, callback));
    }

    /// Drop a looping entity from the animator.
    pub fn remove(&mut self, entity: Entity) {
        self.looping.retain(|member| *member != entity);
    }

    pub fn clear(&mut self) {
        self.looping.clear();
        self.one_shot.clear();
    }

    pub fn is_registered(&self, entity: Entity) -> bool {
        self.looping.contains(&entity) || self.one_shot.iter().any(|(member, _)| *member == entity)
    }

    /// Advance every registered animation by `dt` seconds. One-shot
    /// completion callbacks run only after the whole one-shot batch has
    /// been evaluated, so a callback cannot disturb this tick's iteration.
    pub fn advance(&mut self, registry: &mut Registry, dt: f32) {
        // Entities removed from the registry since last tick drop out.
        self.looping.retain(|entity| registry.contains(*entity));
        self.one_shot.retain(|(entity, _)| registry.contains(*entity));

        for index in 0..self.looping.len() {
            let entity = self.looping[index];
            let _ = step(registry, entity, dt);
        }

        let mut finished = Vec::new();
        for (index, (entity, _)) in self.one_shot.iter().enumerate() {
            if step(registry, *entity, dt) {
                finished.push(index);
            }
        }
        for index in finished.into_iter().rev() {
            let (entity, mut callback) = self.one_shot.remove(index);
            callback(registry, entity);
        }
    }
}

/// Advance one entity's animation; returns true when the frame counter
/// wrapped past the last frame ("replayed").
fn step(registry: &Registry, entity: Entity, dt: f32) -> bool {
    let Ok(mut anim) = registry.world().get::<&mut Animation>(entity) else {
        return false;
    };
    anim.internal += dt * anim.fps;
    if anim.internal >= 1.0 {
        let frame_delta = anim.internal as u32;
        anim.internal -= frame_delta as f32;
        anim.frame += frame_delta;
        if anim.frame >= anim.frame_count {
            anim.frame %= anim.frame_count;
            return true;
        }
    }
    false
}
