//! Event types exchanged between the simulated host and the plugin.
//!
//! Submodules:
//! - [`cleanuptimer`] – a scheduled cleanup is due
//! - [`entityspawned`] – an entity was created
//! - [`round`] – round start and player spawn notifications
pub mod cleanuptimer;
pub mod entityspawned;
pub mod round;
