//! Events emitted by the simulation for the game-state and UI collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyArchetype, PickupKind};

/// Notifications drained into each frame snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave was spawned (1-based index).
    WaveSpawned { wave_index: u32 },
    /// An enemy was destroyed and scored.
    EnemyDestroyed { archetype: EnemyArchetype, score: u32 },
    /// The player collected a pickup.
    PickupCollected { kind: PickupKind },
    /// The player's shield was depleted and removed.
    ShieldDown,
    /// The player was defeated; the outer game loop owns what happens next.
    PlayerDefeated,
    /// The simulation was paused.
    Paused,
    /// The simulation resumed.
    Resumed,
    /// The world was cleared and restarted from wave 1.
    Reset,
}
