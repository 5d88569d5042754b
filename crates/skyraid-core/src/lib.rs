//! Core types and definitions for the SKYRAID simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, errors, and constants.
//! It has no dependency on any rendering or windowing framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod path;
pub mod state;
pub mod types;
