//! Player and debug commands sent from the input collaborator.
//!
//! Commands are queued and processed at the next tick boundary; the core
//! never interprets raw device codes.

use serde::{Deserialize, Serialize};

/// All possible input actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // --- Gameplay ---
    /// Fire according to the current shoot mode.
    Shoot,
    /// Pointer moved; the player tracks this position.
    PointerMoved { x: f32, y: f32 },

    // --- Debug toggles ---
    /// Upgrade the shoot mode one step.
    UpgradeWeapon,
    /// Downgrade the shoot mode one step.
    DowngradeWeapon,
    /// Remove the current wave and spawn the next one.
    KillWave,
    /// Set the simulation time scale (fast-forward / slow-motion).
    SetTimeScale { scale: f32 },
    /// Drop a meteor from above the play area at a random column.
    SpawnMeteor,

    // --- Game state ---
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
    /// Full reset: clear the world and restart from wave 1.
    Reset,
}
