//! Ground-weapon cleanup plugin.
//!
//! The [`sweeper`] module holds the host-agnostic plugin: a debounced cleanup
//! scheduler and a per-weapon eligibility filter, reached through injected
//! host traits. The remaining modules are an ECS simulation of a game server
//! hosting that plugin, used by the binary and by integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod matchsim;
pub mod resources;
pub mod scenario;
pub mod sweeper;
pub mod systems;
