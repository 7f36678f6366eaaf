//! Cleanup counters.

/// Running totals kept by [`DeleteWeapons`](super::plugin::DeleteWeapons).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Global sweeps requested by round start or player spawn.
    pub global_requested: u64,
    /// Requests that found a sweep already pending.
    pub global_debounced: u64,
    /// Global sweeps that actually ran.
    pub sweeps: u64,
    /// Per-weapon checks that ran.
    pub single_checks: u64,
    /// Weapons removed by either path.
    pub removed: u64,
}

impl SweepStats {
    /// Requests that resulted in a queued sweep.
    pub fn global_scheduled(&self) -> u64 {
        self.global_requested.saturating_sub(self.global_debounced)
    }
}
