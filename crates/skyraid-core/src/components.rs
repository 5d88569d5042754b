//! Plain-data components shared across the simulation.
//!
//! Components carry no behavior; game logic lives in systems. Components
//! that hold entity handles (drivers, groups) live in the sim crate, next
//! to the registry that owns the handles.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyArchetype, PickupKind, ShootMode};

/// Health pool for damageable entities (player, enemies, shield).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage; returns true when the pool is depleted.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current -= amount;
        self.current <= 0
    }

    /// Restore health, clamped to the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }
}

/// Per-entity sprite-animation state.
///
/// `internal` is the fractional accumulator in [0, 1) between whole-frame
/// advances; it is reset to 0 when the entity is (re)registered with the
/// animator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Animation {
    pub frame: u32,
    pub frame_count: u32,
    pub fps: f32,
    pub internal: f32,
}

impl Animation {
    pub fn new(frame_count: u32, fps: f32) -> Self {
        Self {
            frame: 0,
            frame_count,
            fps,
            internal: 0.0,
        }
    }
}

/// The player's current fire pattern.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShootState {
    pub mode: ShootMode,
}

/// Which powerup a pickup entity grants on collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupItem(pub PickupKind);

/// Enemy archetype and the score awarded when it is destroyed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub archetype: EnemyArchetype,
    pub score: u32,
}

/// Offset of a formation member from its group's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroupOffset(pub glam::Vec2);
