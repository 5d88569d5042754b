//! World registry — the single authority over entity membership.
//!
//! Wraps the hecs world (entity storage with generation-checked handles)
//! and adds what the simulation needs on top: insertion-ordered type
//! buckets for O(1) typed queries, an all-entities sweep order, and
//! per-entity removal notifiers. Entities are created and destroyed
//! exclusively through this type; `remove` is the only path that fires an
//! entity's removal observers.

use std::collections::HashMap;

use hecs::{DynamicBundle, Entity, World};

use skyraid_core::enums::EntityKind;
use skyraid_core::errors::SimError;

use crate::notifier::{Notifier, ObserverId};

const EMPTY_BUCKET: &[Entity] = &[];

#[derive(Default)]
pub struct Registry {
    world: World,
    buckets: HashMap<EntityKind, Vec<Entity>>,
    /// Every live entity in insertion order, for the per-tick sweep.
    order: Vec<Entity>,
    kinds: HashMap<Entity, EntityKind>,
    observers: HashMap<Entity, Notifier>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity from a component bundle and register it under
    /// `kind`.
    pub fn spawn(&mut self, kind: EntityKind, bundle: impl DynamicBundle) -> Entity {
        let entity = self.world.spawn(bundle);
        self.append(entity, kind);
        entity
    }

    /// Register an existing entity. Idempotent: registering an entity that
    /// is already present is a no-op, whatever kind is passed.
    pub fn append(&mut self, entity: Entity, kind: EntityKind) {
        if self.kinds.contains_key(&entity) {
            return;
        }
        debug_assert!(self.world.contains(entity), "append of unknown entity");
        self.kinds.insert(entity, kind);
        self.buckets.entry(kind).or_default().push(entity);
        self.order.push(entity);
    }

    /// Remove an entity. Fails fast with `NotRegistered` when the entity
    /// is not a member — including re-entrant removal of the entity whose
    /// observers are currently firing.
    ///
    /// Order matters: the entity is de-registered first, then its notifier
    /// fires (observers see the post-removal membership but can still read
    /// the entity's components), then the entity is despawned.
    pub fn remove(&mut self, entity: Entity) -> Result<(), SimError> {
        let kind = self.kinds.remove(&entity).ok_or(SimError::NotRegistered)?;
        if let Some(bucket) = self.buckets.get_mut(&kind) {
            bucket.retain(|member| *member != entity);
        }
        self.order.retain(|member| *member != entity);

        if let Some(mut notifier) = self.observers.remove(&entity) {
            notifier.fire(self, entity);
        }

        let _ = self.world.despawn(entity);
        Ok(())
    }

    /// The live bucket for `kind`, lazily created so callers can hold the
    /// tag before anything of that kind exists.
    pub fn query(&mut self, kind: EntityKind) -> &[Entity] {
        self.buckets.entry(kind).or_default()
    }

    /// Read-only bucket access; unseen kinds yield an empty slice.
    pub fn of_kind(&self, kind: EntityKind) -> &[Entity] {
        self.buckets
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_BUCKET)
    }

    /// Every live entity, in insertion order.
    pub fn all(&self) -> &[Entity] {
        &self.order
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.kinds.contains_key(&entity)
    }

    pub fn kind_of(&self, entity: Entity) -> Option<EntityKind> {
        self.kinds.get(&entity).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Full reset. Observer lists are detached first — without firing —
    /// which breaks the mutual-observation chains between entities
    /// (enemy - driver - group) before the storage drops them all.
    pub fn clear(&mut self) {
        self.observers.clear();
        self.buckets.clear();
        self.order.clear();
        self.kinds.clear();
        self.world.clear();
    }

    /// Subscribe to an entity's removal. Fails when the entity is not
    /// registered.
    pub fn observe_removal(
        &mut self,
        entity: Entity,
        callback: impl FnMut(&mut Registry, Entity) + 'static,
    ) -> Result<ObserverId, SimError> {
        if !self.kinds.contains_key(&entity) {
            return Err(SimError::NotRegistered);
        }
        Ok(self
            .observers
            .entry(entity)
            .or_default()
            .subscribe(Box::new(callback)))
    }

    /// Drop one removal subscription. Tolerant of an already-removed
    /// entity or observer, so teardown code can unsubscribe blindly.
    pub fn ignore_removal(&mut self, entity: Entity, id: ObserverId) {
        if let Some(notifier) = self.observers.get_mut(&entity) {
            notifier.unsubscribe(id);
        }
    }

    /// Number of observers currently attached to an entity.
    pub fn observer_count(&self, entity: Entity) -> usize {
        self.observers.get(&entity).map_or(0, Notifier::len)
    }

    /// Component storage access for systems.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
