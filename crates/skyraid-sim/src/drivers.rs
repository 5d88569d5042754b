//! Driver and group components — the ones that hold entity handles.
//!
//! Parent/child relations are plain `Entity` fields looked up through the
//! registry, never owning references, so a full reset can drop everything
//! at once after detaching the observer lists.

use glam::Vec2;
use hecs::Entity;

use skyraid_core::path::Path;

use crate::notifier::ObserverId;

/// Normalized-time path driver. Repositions its child along `path` every
/// tick; non-looping drivers remove themselves on reaching a bound.
pub struct PathDriver {
    pub child: Entity,
    /// Subscription on the child's removal, dropped when the driver
    /// removes itself first.
    pub child_obs: Option<ObserverId>,
    pub path: Path,
    pub duration_secs: f32,
    /// Normalized progress in [0, 1].
    pub t: f32,
    /// +1.0 forward, -1.0 backward.
    pub direction: f32,
    /// Looping drivers flip direction at the bounds instead of
    /// terminating.
    pub looping: bool,
}

/// Classic back-and-forth sweep: horizontal motion, reversing and stepping
/// down whenever the child's box would cross a play-area side. Never
/// terminates on its own; it goes away when its child does.
pub struct SweepDriver {
    pub child: Entity,
    pub speed_x: f32,
    pub step_y: f32,
    /// +1.0 rightward, -1.0 leftward.
    pub heading: f32,
}

/// Interval shooter: spawns an enemy bullet at the child's position every
/// `interval_secs`.
pub struct ShooterDriver {
    pub child: Entity,
    pub interval_secs: f32,
    pub accumulator: f32,
    /// Aimed shooters fire toward the player; others fire straight down.
    pub aimed: bool,
}

/// Formation container. Members follow the group's position plus their
/// [`GroupOffset`](skyraid_core::components::GroupOffset); the group
/// removes itself once its last member is gone.
pub struct GroupMembers {
    pub members: Vec<Entity>,
}

impl GroupMembers {
    /// Bounding extent of a member layout, for the group's `Size`.
    pub fn extent(offsets: &[Vec2], member_size: Vec2) -> Vec2 {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for offset in offsets {
            min = min.min(*offset);
            max = max.max(*offset);
        }
        if offsets.is_empty() {
            member_size
        } else {
            max - min + member_size
        }
    }
}
