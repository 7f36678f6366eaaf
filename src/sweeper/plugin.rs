//! Plugin entry points.
//!
//! [`DeleteWeapons`] is what the host talks to. It owns the
//! [`CleanupScheduler`] and the [`WeaponFilter`], and exposes one handler per
//! host notification:
//!
//! | Host notification | Handler                              |
//! |-------------------|--------------------------------------|
//! | round started     | [`DeleteWeapons::on_round_start`]    |
//! | player spawned    | [`DeleteWeapons::on_player_spawn`]   |
//! | entity spawned    | [`DeleteWeapons::on_entity_spawned`] |
//! | timer fired       | [`DeleteWeapons::on_timer`]          |
//!
//! Handlers never fail. Anything unexpected (stale handles, unnamed entities,
//! non-weapons in an enumeration) is skipped.

use log::{debug, info, trace};

use super::CleanupTask;
use super::filter::WeaponFilter;
use super::host::{EntityAccess, TimerQueue};
use super::scheduler::CleanupScheduler;
use super::stats::SweepStats;

/// Static plugin metadata. Has no effect on behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub description: &'static str,
}

pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "cs2-deleteweapons",
    version: env!("CARGO_PKG_VERSION"),
    author: "Micka",
    description: "Removes ground weapons after round start and player spawns.",
};

/// The ground-weapon cleanup plugin.
#[derive(Debug, Clone, Default)]
pub struct DeleteWeapons {
    scheduler: CleanupScheduler,
    filter: WeaponFilter,
    stats: SweepStats,
}

impl DeleteWeapons {
    pub fn new(scheduler: CleanupScheduler, filter: WeaponFilter) -> Self {
        Self {
            scheduler,
            filter,
            stats: SweepStats::default(),
        }
    }

    pub fn info(&self) -> &'static PluginInfo {
        &PLUGIN_INFO
    }

    pub fn scheduler(&self) -> &CleanupScheduler {
        &self.scheduler
    }

    pub fn filter(&self) -> &WeaponFilter {
        &self.filter
    }

    pub fn stats(&self) -> SweepStats {
        self.stats
    }

    /// Round started: request a debounced sweep.
    pub fn on_round_start<Q: TimerQueue>(&mut self, timers: &mut Q) {
        trace!("Round start");
        self.request_global(timers);
    }

    /// A player spawned: request a debounced sweep.
    pub fn on_player_spawn<Q: TimerQueue>(&mut self, timers: &mut Q) {
        trace!("Player spawn");
        self.request_global(timers);
    }

    /// An entity was created. Managed weapons get their own delayed check.
    pub fn on_entity_spawned<W>(&mut self, host: &mut W, entity: W::Handle)
    where
        W: EntityAccess + TimerQueue<Entity = <W as EntityAccess>::Handle>,
    {
        if !host.is_weapon(entity) || !self.filter.is_managed(&*host, entity) {
            return;
        }
        trace!("Weapon {:?} spawned, scheduling single check", entity);
        self.scheduler.schedule_single(host, entity);
    }

    /// A cleanup timer fired.
    ///
    /// Returns the number of weapons removed.
    pub fn on_timer<W: EntityAccess>(&mut self, world: &mut W, task: CleanupTask<W::Handle>) -> u32 {
        match task {
            CleanupTask::GlobalSweep => {
                self.scheduler.begin_sweep();
                self.sweep(world)
            }
            CleanupTask::Single(weapon) => {
                self.stats.single_checks = self.stats.single_checks.saturating_add(1);
                if self.filter.remove_if_grounded(world, weapon) {
                    self.stats.removed = self.stats.removed.saturating_add(1);
                    1
                } else {
                    0
                }
            }
        }
    }

    fn request_global<Q: TimerQueue>(&mut self, timers: &mut Q) {
        self.stats.global_requested = self.stats.global_requested.saturating_add(1);
        if !self.scheduler.schedule_global(timers) {
            self.stats.global_debounced = self.stats.global_debounced.saturating_add(1);
        }
    }

    fn sweep<W: EntityAccess>(&mut self, world: &mut W) -> u32 {
        self.stats.sweeps = self.stats.sweeps.saturating_add(1);
        let weapons = world.find_by_designer_prefix(self.filter.prefix());
        let seen = weapons.len();
        let mut removed = 0;
        for weapon in weapons {
            if !world.is_weapon(weapon) {
                continue;
            }
            if self.filter.remove_if_grounded(world, weapon) {
                removed += 1;
            }
        }
        self.stats.removed = self.stats.removed.saturating_add(u64::from(removed));
        if removed > 0 {
            info!("Sweep removed {} of {} weapons", removed, seen);
        } else {
            debug!("Sweep found nothing to remove among {} weapons", seen);
        }
        removed
    }
}
