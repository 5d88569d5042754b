//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the entity registry, processes queued commands,
//! runs all systems, and produces `FrameSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::Entity;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skyraid_core::commands::Command;
use skyraid_core::components::{Animation, Health, ShootState};
use skyraid_core::constants::{METEOR_SIZE, PLAY_AREA_HEIGHT, PLAY_AREA_WIDTH};
use skyraid_core::enums::{EntityKind, GamePhase};
use skyraid_core::events::GameEvent;
use skyraid_core::state::{FrameSnapshot, SpriteView};
use skyraid_core::types::{Position, SimClock, Size};
use skyraid_waves::formations::StandardWaves;
use skyraid_waves::WaveGenerator;

use crate::animator::Animator;
use crate::registry::Registry;
use crate::spawner::WaveSpawner;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the registry and all sim state.
pub struct SimulationEngine {
    registry: Registry,
    animator: Animator,
    spawner: WaveSpawner,
    clock: SimClock,
    phase: GamePhase,
    rng: ChaCha8Rng,
    score: u32,
    player: Entity,
    command_queue: VecDeque<Command>,
    events: Vec<GameEvent>,
    done_buffer: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create a new engine with the stock wave formations.
    pub fn new(config: SimConfig) -> Self {
        Self::with_generator(config, Box::new(StandardWaves))
    }

    /// Create a new engine with a custom wave generator.
    pub fn with_generator(config: SimConfig, generator: Box<dyn WaveGenerator>) -> Self {
        let mut registry = Registry::new();
        let mut animator = Animator::new();

        let player = world_setup::spawn_player(&mut registry);
        animator.register_loop(&registry, player);

        let spawner = WaveSpawner::new(generator, player);
        spawner.spawn_wave(&mut registry);

        let mut clock = SimClock::default();
        clock.set_time_scale(config.time_scale);

        Self {
            registry,
            animator,
            spawner,
            clock,
            phase: GamePhase::Active,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: 0,
            player,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            done_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `raw_dt_secs` of wall-clock time and return
    /// the resulting snapshot. The delta is scaled by the current time scale
    /// before any system sees it.
    pub fn tick(&mut self, raw_dt_secs: f32) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = self.clock.scale(raw_dt_secs);
            self.run_systems(dt);
        }

        self.events.extend(self.spawner.drain_events());
        self.build_snapshot()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f32 {
        self.clock.time_scale
    }

    /// The player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Get a read-only reference to the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Shoot => {
                if self.phase != GamePhase::Active {
                    return;
                }
                let shot = self
                    .registry
                    .world()
                    .get::<&Position>(self.player)
                    .ok()
                    .map(|p| p.0)
                    .zip(
                        self.registry
                            .world()
                            .get::<&ShootState>(self.player)
                            .ok()
                            .map(|s| s.mode),
                    );
                if let Some((origin, mode)) = shot {
                    world_setup::spawn_player_shots(&mut self.registry, origin, mode);
                }
            }
            Command::PointerMoved { x, y } => {
                if self.phase != GamePhase::Active {
                    return;
                }
                let target = Vec2::new(
                    x.clamp(0.0, PLAY_AREA_WIDTH),
                    y.clamp(0.0, PLAY_AREA_HEIGHT),
                );
                if let Ok(mut pos) = self.registry.world().get::<&mut Position>(self.player) {
                    pos.0 = target;
                }
            }
            Command::UpgradeWeapon => {
                if let Ok(mut state) = self.registry.world().get::<&mut ShootState>(self.player) {
                    state.mode = state.mode.upgraded();
                }
            }
            Command::DowngradeWeapon => {
                if let Ok(mut state) = self.registry.world().get::<&mut ShootState>(self.player) {
                    state.mode = state.mode.downgraded();
                }
            }
            Command::KillWave => {
                if self.phase == GamePhase::Active {
                    self.spawner.kill_wave(&mut self.registry);
                }
            }
            Command::SetTimeScale { scale } => {
                self.clock.set_time_scale(scale);
            }
            Command::SpawnMeteor => {
                if self.phase == GamePhase::Active {
                    let x = self.rng.gen_range(METEOR_SIZE..PLAY_AREA_WIDTH - METEOR_SIZE);
                    world_setup::spawn_meteor(&mut self.registry, x);
                }
            }
            Command::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    self.events.push(GameEvent::Paused);
                }
            }
            Command::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    self.events.push(GameEvent::Resumed);
                }
            }
            Command::Reset => self.reset(),
        }
    }

    /// Clear the world and restart from wave 1. The spawner detaches its
    /// observers first so the teardown cannot trigger a respawn.
    fn reset(&mut self) {
        self.spawner.reset(&mut self.registry);
        self.registry.clear();
        self.animator.clear();
        self.done_buffer.clear();
        self.despawn_buffer.clear();

        self.player = world_setup::spawn_player(&mut self.registry);
        self.animator.register_loop(&self.registry, self.player);
        self.spawner.spawn_wave(&mut self.registry);

        self.score = 0;
        self.clock.elapsed_secs = 0.0;
        self.phase = GamePhase::Active;
        self.events.push(GameEvent::Reset);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Shield entities track the player.
        self.sync_shield();
        // 2. Straight-line integration (bullets, pickups)
        systems::kinematics::run(&mut self.registry, dt);
        // 3. Path and sweep drivers, group member sync
        systems::movement::run(&mut self.registry, &mut self.done_buffer, dt);
        // 4. Enemy interval shooters
        systems::shooting::run(&mut self.registry, dt);
        // 5. Offscreen culling
        systems::cleanup::run(&mut self.registry, &mut self.despawn_buffer);
        // 6. Collision resolution (may spawn the next wave synchronously)
        let defeated = systems::collision::run(
            &mut self.registry,
            &mut self.animator,
            &mut self.rng,
            &mut self.score,
            &mut self.events,
        );
        if defeated {
            self.phase = GamePhase::Defeated;
            self.events.push(GameEvent::PlayerDefeated);
        }
        // 7. Sprite animation
        self.animator.advance(&mut self.registry, dt);
    }

    fn sync_shield(&mut self) {
        let player_pos = self
            .registry
            .world()
            .get::<&Position>(self.player)
            .ok()
            .map(|p| p.0);
        let Some(player_pos) = player_pos else {
            return;
        };
        let shields: Vec<Entity> = self.registry.of_kind(EntityKind::Shield).to_vec();
        for shield in shields {
            if let Ok(mut pos) = self.registry.world().get::<&mut Position>(shield) {
                pos.0 = player_pos;
            }
        }
    }

    fn build_snapshot(&mut self) -> FrameSnapshot {
        let world = self.registry.world();

        let (player_health, player_max_health) = world
            .get::<&Health>(self.player)
            .map(|h| (h.current, h.max))
            .unwrap_or((0, 0));

        let shield_health = self
            .registry
            .of_kind(EntityKind::Shield)
            .first()
            .and_then(|shield| world.get::<&Health>(*shield).ok().map(|h| h.current));

        let mut sprites = Vec::with_capacity(self.registry.len());
        for entity in self.registry.all() {
            let Some(kind) = self.registry.kind_of(*entity) else {
                continue;
            };
            // Drivers and groups are bookkeeping entities, never drawn.
            if matches!(kind, EntityKind::Driver | EntityKind::Group) {
                continue;
            }
            let Ok(position) = world.get::<&Position>(*entity) else {
                continue;
            };
            let Ok(size) = world.get::<&Size>(*entity) else {
                continue;
            };
            let frame = world
                .get::<&Animation>(*entity)
                .map(|anim| anim.frame)
                .unwrap_or(0);
            sprites.push(SpriteView {
                kind,
                position: *position,
                size: *size,
                frame,
            });
        }

        FrameSnapshot {
            elapsed_secs: self.clock.elapsed_secs,
            phase: self.phase,
            next_wave_index: self.spawner.next_wave_index(),
            score: self.score,
            player_health,
            player_max_health,
            shield_health,
            sprites,
            events: std::mem::take(&mut self.events),
        }
    }
}
