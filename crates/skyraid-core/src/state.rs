//! Frame snapshot — the complete visible state handed to the rendering
//! and score/UI collaborators each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase};
use crate::events::GameEvent;
use crate::types::{Position, Size};

/// Complete per-tick state for the draw pass and HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Elapsed simulation time in seconds (scaled).
    pub elapsed_secs: f32,
    pub phase: GamePhase,
    /// 1-based index of the wave that will spawn next.
    pub next_wave_index: u32,
    pub score: u32,
    pub player_health: i32,
    pub player_max_health: i32,
    /// Shield health, or `None` when no shield is active.
    pub shield_health: Option<i32>,
    /// One draw call per live entity, in registry insertion order.
    pub sprites: Vec<SpriteView>,
    /// Events raised during this tick.
    pub events: Vec<GameEvent>,
}

/// A single draw call: where to draw which sprite, and at which frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteView {
    pub kind: EntityKind,
    pub position: Position,
    pub size: Size,
    /// Current animation frame; 0 for unanimated entities.
    pub frame: u32,
}
