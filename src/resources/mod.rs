//! ECS resources of the simulated host.
//!
//! Overview
//! - `sweepconfig` – cleanup and simulation settings loaded from INI
//! - `sweeper` – the plugin instance the observers drive
//! - `worldtime` – simulation time and delta
pub mod sweepconfig;
pub mod sweeper;
pub mod worldtime;
