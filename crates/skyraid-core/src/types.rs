//! Fundamental geometric and simulation types.
//!
//! The play area uses screen coordinates: x grows to the right,
//! y grows downward, with the origin at the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in play-area space (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Axis-aligned bounding-box extent of an entity (pixels).
/// The box is centered on the entity's position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size(pub Vec2);

/// 2D velocity (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl Size {
    pub fn new(w: f32, h: f32) -> Self {
        Self(Vec2::new(w, h))
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Axis-aligned rectangle used for collision tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a rectangle from a center point and a full extent.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test: boxes that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Converts measured wall-clock deltas into simulation time.
///
/// The time scale is a multiplicative fast-forward/slow-motion knob; it
/// scales the delta handed to every system without changing per-tick
/// ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimClock {
    /// Elapsed simulation time in seconds (scaled).
    pub elapsed_secs: f32,
    /// Current time-scale factor (1.0 = real time).
    pub time_scale: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            elapsed_secs: 0.0,
            time_scale: 1.0,
        }
    }
}

impl SimClock {
    /// Scale a raw wall-clock delta, accumulate it, and return the tick dt.
    pub fn scale(&mut self, raw_dt_secs: f32) -> f32 {
        let dt = raw_dt_secs * self.time_scale;
        self.elapsed_secs += dt;
        dt
    }

    /// Set the time-scale factor, clamped to a workable range.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.clamp(crate::constants::TIME_SCALE_MIN, crate::constants::TIME_SCALE_MAX);
    }
}
