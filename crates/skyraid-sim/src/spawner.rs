//! Enemy wave spawner.
//!
//! Populates the registry with a wave's enemies (plus their movement and
//! shooter drivers), observes each enemy's removal, and spawns the next
//! wave synchronously in the notification that empties the current one.
//!
//! State is shared behind `Rc<RefCell<..>>` so the removal observers held
//! by the registry can reach it; everything runs on the one simulation
//! thread.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use glam::Vec2;
use hecs::Entity;

use skyraid_core::components::{EnemyInfo, Health};
use skyraid_core::constants::{PLAY_AREA_HEIGHT, PLAY_AREA_WIDTH};
use skyraid_core::enums::EntityKind;
use skyraid_core::events::GameEvent;
use skyraid_core::types::{Position, Size};
use skyraid_waves::{EnemyTemplate, MoverPlan, WaveGenerator};

use crate::notifier::ObserverId;
use crate::registry::Registry;
use crate::world_setup;

struct SpawnerState {
    /// 1-based index of the wave that will spawn next.
    next_wave_index: u32,
    /// Enemies of the current wave, with this spawner's subscription on
    /// each.
    live: Vec<(Entity, ObserverId)>,
    generator: Box<dyn WaveGenerator>,
    player: Entity,
    /// Events raised from inside removal notifications; the engine drains
    /// them once per tick.
    events: Vec<GameEvent>,
}

pub struct WaveSpawner {
    inner: Rc<RefCell<SpawnerState>>,
}

impl WaveSpawner {
    pub fn new(generator: Box<dyn WaveGenerator>, player: Entity) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SpawnerState {
                next_wave_index: 1,
                live: Vec::new(),
                generator,
                player,
                events: Vec::new(),
            })),
        }
    }

    /// Index of the wave that will spawn next (1-based, monotonic).
    pub fn next_wave_index(&self) -> u32 {
        self.inner.borrow().next_wave_index
    }

    /// Number of enemies of the current wave still alive.
    pub fn live_count(&self) -> usize {
        self.inner.borrow().live.len()
    }

    /// Events buffered since the last drain.
    pub fn drain_events(&self) -> Vec<GameEvent> {
        std::mem::take(&mut self.inner.borrow_mut().events)
    }

    /// Spawn the next wave now. An empty wave advances the index without
    /// registering anything.
    pub fn spawn_wave(&self, registry: &mut Registry) {
        Self::spawn_wave_inner(&self.inner, registry);
    }

    /// Debug override: unsubscribe from every live enemy first (so the
    /// per-enemy completion handler cannot respawn mid-teardown), remove
    /// them all, then spawn the next wave exactly once.
    pub fn kill_wave(&self, registry: &mut Registry) {
        let live = std::mem::take(&mut self.inner.borrow_mut().live);
        for (enemy, observer) in live {
            registry.ignore_removal(enemy, observer);
            let _ = registry.remove(enemy);
        }
        Self::spawn_wave_inner(&self.inner, registry);
    }

    /// Rewind to wave 1 and detach from current enemies without removing
    /// them; the registry's own `clear` owns the actual teardown during a
    /// full reset.
    pub fn reset(&self, registry: &mut Registry) {
        let live = {
            let mut state = self.inner.borrow_mut();
            state.next_wave_index = 1;
            state.events.clear();
            std::mem::take(&mut state.live)
        };
        for (enemy, observer) in live {
            registry.ignore_removal(enemy, observer);
        }
    }

    fn spawn_wave_inner(inner: &Rc<RefCell<SpawnerState>>, registry: &mut Registry) {
        let (wave_index, templates) = {
            let mut state = inner.borrow_mut();
            let wave_index = state.next_wave_index;
            state.next_wave_index += 1;
            let player_pos = registry
                .world()
                .get::<&Position>(state.player)
                .map(|p| p.0)
                .unwrap_or(Vec2::new(
                    PLAY_AREA_WIDTH / 2.0,
                    PLAY_AREA_HEIGHT * 0.9,
                ));
            let templates = state.generator.generate(wave_index, player_pos);
            (wave_index, templates)
        };

        if templates.is_empty() {
            return;
        }

        let enemies = build_wave(registry, &templates);

        let mut live = Vec::with_capacity(enemies.len());
        for enemy in &enemies {
            let handle = Rc::clone(inner);
            if let Ok(observer) = registry.observe_removal(*enemy, move |reg, removed| {
                Self::on_enemy_removed(&handle, reg, removed);
            }) {
                live.push((*enemy, observer));
            }
        }

        let mut state = inner.borrow_mut();
        state.live = live;
        state.events.push(GameEvent::WaveSpawned { wave_index });
    }

    fn on_enemy_removed(inner: &Rc<RefCell<SpawnerState>>, registry: &mut Registry, removed: Entity) {
        let wave_cleared = {
            let mut state = inner.borrow_mut();
            state.live.retain(|(enemy, _)| *enemy != removed);
            state.live.is_empty()
        };
        if wave_cleared {
            Self::spawn_wave_inner(inner, registry);
        }
    }
}

/// Instantiate a wave's templates: enemies first, then formation groups,
/// then movement and shooter drivers. Returns the enemy entities in
/// template order.
fn build_wave(registry: &mut Registry, templates: &[EnemyTemplate]) -> Vec<Entity> {
    let mut enemies = Vec::with_capacity(templates.len());
    for template in templates {
        let enemy = registry.spawn(
            EntityKind::Enemy,
            (
                Position(template.spawn_pos),
                Size(template.size),
                Health::full(template.health),
                EnemyInfo {
                    archetype: template.archetype,
                    score: template.score,
                },
            ),
        );
        enemies.push(enemy);
    }

    // Assemble formation groups keyed by the templates' group ids, in key
    // order so spawn order is deterministic. The group's mover comes from
    // the first member template that carries one.
    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, template) in templates.iter().enumerate() {
        if let Some(key) = template.group {
            groups.entry(key).or_default().push(index);
        }
    }
    for member_indices in groups.values() {
        let members: Vec<Entity> = member_indices.iter().map(|i| enemies[*i]).collect();
        let Ok(group) = world_setup::spawn_group(registry, &members) else {
            continue;
        };
        let mover = member_indices
            .iter()
            .find_map(|i| templates[*i].mover.as_ref());
        if let Some(plan) = mover {
            attach_mover(registry, group, plan);
        }
    }

    for (index, template) in templates.iter().enumerate() {
        if template.group.is_none() {
            if let Some(plan) = template.mover.as_ref() {
                attach_mover(registry, enemies[index], plan);
            }
        }
        if let Some(shooter) = template.shooter.as_ref() {
            let _ = world_setup::attach_shooter(
                registry,
                enemies[index],
                shooter.interval_secs,
                shooter.aimed,
            );
        }
    }

    enemies
}

fn attach_mover(registry: &mut Registry, child: Entity, plan: &MoverPlan) {
    match plan {
        MoverPlan::Path {
            path,
            duration_secs,
            looping,
        } => {
            let _ = world_setup::attach_path_driver(
                registry,
                child,
                path.clone(),
                *duration_secs,
                *looping,
            );
        }
        MoverPlan::Sweep { speed_x, step_y } => {
            let _ = world_setup::attach_sweep_driver(registry, child, *speed_x, *step_y);
        }
    }
}
