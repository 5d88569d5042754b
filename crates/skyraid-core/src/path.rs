//! Parametric movement paths.
//!
//! A path maps normalized time `t` in [0, 1] to a position. Durations are
//! carried separately (see [`Segment`]) so compound paths can weight their
//! sub-paths by real time. The driver logic that advances `t` each tick
//! lives in the sim crate; this module is pure geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::errors::SimError;

/// A sub-path paired with the real time it should take to traverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub path: Path,
    /// Traversal time in seconds; always positive.
    pub duration_secs: f32,
}

/// A parametric path through play-area space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Path {
    /// Straight line from `from` to `to`.
    Linear { from: Vec2, to: Vec2 },
    /// Quadratic bezier with control point `p1`.
    Bezier { p0: Vec2, p1: Vec2, p2: Vec2 },
    /// Ordered sub-paths with individual durations. Global `t` is mapped
    /// to elapsed real time, then to the sub-path whose cumulative window
    /// contains it.
    Compound(Vec<Segment>),
}

impl Path {
    pub fn linear(from: Vec2, to: Vec2) -> Self {
        Path::Linear { from, to }
    }

    pub fn bezier(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Path::Bezier { p0, p1, p2 }
    }

    /// Straight line whose duration is derived from a travel speed:
    /// `duration = distance / speed`. Non-positive speeds are rejected
    /// rather than producing an infinite-duration path.
    pub fn linear_with_speed(from: Vec2, to: Vec2, speed: f32) -> Result<Segment, SimError> {
        if speed <= 0.0 {
            return Err(SimError::InvalidParameter(
                "linear_with_speed requires a positive speed",
            ));
        }
        Ok(Segment {
            path: Path::linear(from, to),
            duration_secs: from.distance(to) / speed,
        })
    }

    /// Compound path from ordered segments. Rejects an empty list and
    /// non-positive segment durations.
    pub fn compound(segments: Vec<Segment>) -> Result<Self, SimError> {
        if segments.is_empty() {
            return Err(SimError::InvalidParameter(
                "compound path requires at least one segment",
            ));
        }
        if segments.iter().any(|s| s.duration_secs <= 0.0) {
            return Err(SimError::InvalidParameter(
                "compound segment durations must be positive",
            ));
        }
        Ok(Path::Compound(segments))
    }

    /// Total real duration of a compound path; zero-cost for simple paths
    /// (their duration is owned by the driver, not the path).
    pub fn total_duration_secs(&self) -> Option<f32> {
        match self {
            Path::Compound(segments) => Some(segments.iter().map(|s| s.duration_secs).sum()),
            _ => None,
        }
    }

    /// Evaluate the path at normalized time `t` in [0, 1].
    pub fn at(&self, t: f32) -> Vec2 {
        match self {
            Path::Linear { from, to } => from.lerp(*to, t),
            Path::Bezier { p0, p1, p2 } => {
                let a = p0.lerp(*p1, t);
                let b = p1.lerp(*p2, t);
                a.lerp(b, t)
            }
            Path::Compound(segments) => {
                let total: f32 = segments.iter().map(|s| s.duration_secs).sum();
                let elapsed = t * total;

                // An elapsed time landing exactly on a window boundary
                // belongs to the earlier segment (evaluated at local
                // t = 1), so the very end of the path is closed.
                let mut window_start = 0.0_f32;
                for (i, segment) in segments.iter().enumerate() {
                    let window_end = window_start + segment.duration_secs;
                    let is_last = i == segments.len() - 1;
                    if elapsed <= window_end || is_last {
                        let local =
                            ((elapsed - window_start) / segment.duration_secs).clamp(0.0, 1.0);
                        return segment.path.at(local);
                    }
                    window_start = window_end;
                }
                // Unreachable: constructors reject empty compounds.
                Vec2::ZERO
            }
        }
    }
}
