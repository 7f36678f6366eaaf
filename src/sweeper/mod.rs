//! Ground-weapon cleanup core.
//!
//! Host-agnostic logic that decides when to sweep the world for dropped
//! weapons and which weapons a sweep may remove. The host engine is reached
//! only through the traits in [`host`], so everything here can be exercised
//! without a running game.
//!
//! Submodules:
//! - [`filter`] – per-weapon eligibility check and grounded removal
//! - [`host`] – entity and timer services the core consumes
//! - [`plugin`] – event handlers tying scheduler and filter together
//! - [`scheduler`] – debounced global sweep and per-weapon checks
//! - [`stats`] – counters reported by the simulation driver

pub mod filter;
pub mod host;
pub mod plugin;
pub mod scheduler;
pub mod stats;

#[cfg(test)]
pub(crate) mod testhost;

/// Delay between a trigger and the cleanup it schedules, in seconds.
pub const CLEANUP_DELAY_SECONDS: f32 = 0.25;

/// Designer-name prefix shared by every weapon entity.
pub const WEAPON_PREFIX: &str = "weapon_";

/// Objective item that must never be removed.
pub const OBJECTIVE_WEAPON: &str = "weapon_c4";

/// Work a cleanup timer carries until it fires.
///
/// `H` is the host's non-owning entity handle. A handle stored here may be
/// stale by the time the timer fires; the filter revalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupTask<H> {
    /// Sweep every weapon currently in the world.
    GlobalSweep,
    /// Check a single weapon spawned after the last sweep.
    Single(H),
}
