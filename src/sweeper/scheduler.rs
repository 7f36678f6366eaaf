//! Debounced cleanup scheduling.
//!
//! Round start and every player spawn each ask for a sweep. Bursts of those
//! requests collapse into a single delayed [`CleanupTask::GlobalSweep`]: the
//! pending flag is raised before the timer is queued and lowered as the
//! sweep fires, before any weapon is inspected, so a request arriving while
//! a sweep runs queues the next one.
//!
//! Per-weapon checks ([`CleanupTask::Single`]) bypass the flag entirely.

use log::debug;

use super::CleanupTask;
use super::CLEANUP_DELAY_SECONDS;
use super::host::TimerQueue;

/// Owns the pending-sweep flag and the cleanup delay.
#[derive(Debug, Clone)]
pub struct CleanupScheduler {
    delay: f32,
    pending_global: bool,
}

impl Default for CleanupScheduler {
    fn default() -> Self {
        Self::new(CLEANUP_DELAY_SECONDS)
    }
}

impl CleanupScheduler {
    /// Create a scheduler that waits `delay` seconds before each cleanup.
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            pending_global: false,
        }
    }

    /// Delay applied to every scheduled cleanup, in seconds.
    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Whether a global sweep is queued and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending_global
    }

    /// Queue a global sweep unless one is already pending.
    ///
    /// Returns `true` if a new timer was queued.
    pub fn schedule_global<Q: TimerQueue>(&mut self, timers: &mut Q) -> bool {
        if self.pending_global {
            debug!("Global sweep already pending, request debounced");
            return false;
        }
        self.pending_global = true;
        timers.schedule(self.delay, CleanupTask::GlobalSweep);
        debug!("Global sweep scheduled in {:.2}s", self.delay);
        true
    }

    /// Queue a check for one weapon, independent of the pending flag.
    pub fn schedule_single<Q: TimerQueue>(&self, timers: &mut Q, weapon: Q::Entity) {
        timers.schedule(self.delay, CleanupTask::Single(weapon));
    }

    /// Mark the pending global sweep as fired.
    ///
    /// Must run before the sweep body enumerates weapons.
    pub fn begin_sweep(&mut self) {
        self.pending_global = false;
    }
}
