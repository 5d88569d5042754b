//! Removal observer list attached to registered entities.
//!
//! Observers are invoked synchronously when the registry removes the
//! entity; everything happens within one tick, so no event loop is
//! involved.

use hecs::Entity;

use crate::registry::Registry;

/// Handle identifying one subscription on one notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Callback invoked with the registry and the entity being removed. The
/// registry passed in has already de-registered the entity, so observers
/// may freely query siblings, remove other entities, or manage
/// subscriptions; the removed entity's components are still readable.
pub type RemovalCallback = Box<dyn FnMut(&mut Registry, Entity)>;

/// An ordered observer list, fired at most once per entity removal.
#[derive(Default)]
pub struct Notifier {
    observers: Vec<(ObserverId, RemovalCallback)>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; returns the id used to unsubscribe.
    pub fn subscribe(&mut self, callback: RemovalCallback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, callback));
        id
    }

    /// Remove one observer; returns false when the id is unknown (benign,
    /// e.g. unsubscribing during teardown).
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    /// Drop every observer without firing.
    pub fn clear(&mut self) {
        self.observers.clear();
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Invoke every currently-registered observer exactly once, in
    /// registration order. The list is moved out for the duration of the
    /// callbacks (a snapshot, so subscription changes made during firing
    /// cannot skip or duplicate anyone) and restored afterwards; the
    /// notifier remains usable after firing.
    pub fn fire(&mut self, registry: &mut Registry, entity: Entity) {
        let mut snapshot = std::mem::take(&mut self.observers);
        for (_, callback) in snapshot.iter_mut() {
            callback(registry, entity);
        }
        let added_during_fire = std::mem::take(&mut self.observers);
        self.observers = snapshot;
        self.observers.extend(added_during_fire);
    }
}
