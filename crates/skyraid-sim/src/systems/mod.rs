//! Systems that operate on the registry each tick.
//!
//! Systems are free functions over `&mut Registry` plus whatever
//! collaborators they need (animator, rng, score, events). They own no
//! state — all state lives in components or the registry.

pub mod cleanup;
pub mod collision;
pub mod kinematics;
pub mod movement;
pub mod shooting;
