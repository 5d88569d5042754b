//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Type tag discriminating which registry bucket an entity lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's ship.
    Player,
    /// An enemy ship.
    Enemy,
    /// A bullet fired by the player.
    Bullet,
    /// A bullet fired by an enemy.
    EnemyBullet,
    /// A droppable powerup falling toward the player.
    Pickup,
    /// The player's shield satellite.
    Shield,
    /// An auxiliary entity repositioning another entity over time.
    Driver,
    /// A formation container whose members move together.
    Group,
    /// A one-shot explosion effect.
    Explosion,
    /// A falling rock that defeats the player on contact.
    Meteor,
}

/// Enemy archetype category. Determines health, score value, and sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Baseline fighter in a sweeping row.
    Grunt,
    /// Tougher fighter that shoots back.
    Gunner,
    /// Fast diver along a bezier path.
    Diver,
}

/// Powerup variety dropped by destroyed enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Restores player health.
    Repair,
    /// Upgrades the shoot mode.
    Weapon,
    /// Grants or recharges the shield.
    Shield,
}

/// Player fire pattern, upgraded by weapon pickups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShootMode {
    /// One bullet straight up.
    #[default]
    Single,
    /// Two parallel bullets.
    Double,
    /// Three-bullet spread.
    Triple,
}

impl ShootMode {
    /// Next mode up, saturating at `Triple`.
    pub fn upgraded(self) -> Self {
        match self {
            ShootMode::Single => ShootMode::Double,
            ShootMode::Double | ShootMode::Triple => ShootMode::Triple,
        }
    }

    /// Next mode down, saturating at `Single`.
    pub fn downgraded(self) -> Self {
        match self {
            ShootMode::Triple => ShootMode::Double,
            ShootMode::Double | ShootMode::Single => ShootMode::Single,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    Defeated,
}
