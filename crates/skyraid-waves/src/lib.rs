//! Wave generation for SKYRAID.
//!
//! Produces per-wave enemy templates for the spawner. Generation is pure:
//! the same wave index always yields the same templates, so a replayed
//! session spawns identical waves.

use glam::Vec2;

use skyraid_core::enums::EnemyArchetype;
use skyraid_core::path::Path;

pub mod formations;

pub use formations::StandardWaves;
pub use skyraid_core as core;

#[cfg(test)]
mod tests;

/// How a spawned enemy (or its formation group) should be moved.
#[derive(Debug, Clone)]
pub enum MoverPlan {
    /// A path driver over `path`, traversed in `duration_secs`.
    Path {
        path: Path,
        duration_secs: f32,
        looping: bool,
    },
    /// A classic back-and-forth sweep with a downward step at each bound.
    Sweep { speed_x: f32, step_y: f32 },
}

/// An interval shooter attached to the enemy.
#[derive(Debug, Clone, Copy)]
pub struct ShooterPlan {
    pub interval_secs: f32,
    /// Aimed shooters fire toward the player's position at fire time;
    /// unaimed ones fire straight down.
    pub aimed: bool,
}

/// Template for one enemy of a wave: the enemy itself plus its optional
/// movement and shooter drivers.
#[derive(Debug, Clone)]
pub struct EnemyTemplate {
    pub archetype: EnemyArchetype,
    pub health: i32,
    pub score: u32,
    pub size: Vec2,
    pub spawn_pos: Vec2,
    /// Formation key within the wave. Templates sharing a key are spawned
    /// as members of one group entity; the group's mover comes from the
    /// first member that carries one.
    pub group: Option<u32>,
    pub mover: Option<MoverPlan>,
    pub shooter: Option<ShooterPlan>,
}

/// The wave-generation collaborator. The spawner treats this as a black
/// box keyed by the 1-based wave index.
pub trait WaveGenerator {
    fn generate(&mut self, wave_index: u32, player_pos: Vec2) -> Vec<EnemyTemplate>;
}
