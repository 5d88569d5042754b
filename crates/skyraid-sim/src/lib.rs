//! Simulation engine for SKYRAID.
//!
//! Owns the entity registry built on hecs, advances the game by scaled
//! wall-clock deltas, and produces FrameSnapshots for the frontend.

pub mod animator;
pub mod drivers;
pub mod engine;
pub mod notifier;
pub mod registry;
pub mod spawner;
pub mod systems;
pub mod world_setup;

pub use skyraid_core as core;
pub use engine::{SimConfig, SimulationEngine};
