//! Simulated host systems.
//!
//! Submodules overview
//! - [`cleanuptimer`] – count cleanup timers down and run expired tasks
//! - [`host`] – entity and timer services backed by the ECS world
//! - [`plugin`] – observers forwarding host events to the plugin
//! - [`time`] – update simulation time and delta

pub mod cleanuptimer;
pub mod host;
pub mod plugin;
pub mod time;
