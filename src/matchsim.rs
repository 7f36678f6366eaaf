//! Tick-driven match simulation.
//!
//! [`MatchSim`] owns an ECS world with the plugin installed and advances it
//! at a fixed tick rate, applying [`Scenario`] actions as their time comes.
//!
//! # Tick Flow
//!
//! 1. Apply every scenario action due at the current time
//! 2. `update_world_time` advances the clock by one tick
//! 3. The schedule runs `update_cleanup_timers`; expired timers trigger the
//!    plugin through observers

use bevy_ecs::prelude::*;
use log::{debug, info};
use rustc_hash::FxHashMap;
use std::fmt;

use crate::components::cleanuptimer::CleanupTimer;
use crate::components::player::Player;
use crate::game;
use crate::resources::sweepconfig::SweepConfig;
use crate::resources::sweeper::Sweeper;
use crate::resources::worldtime::WorldTime;
use crate::scenario::{Action, Scenario};
use crate::sweeper::stats::SweepStats;
use crate::systems::cleanuptimer::update_cleanup_timers;
use crate::systems::time::update_world_time;

/// Slack when comparing the clock to an action time.
const TIME_EPSILON: f64 = 1e-4;

/// Outcome of a simulated match.
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    pub elapsed: f64,
    pub stats: SweepStats,
    /// Designer names of weapons left on the ground, sorted.
    pub ground_weapons: Vec<String>,
    pub pending_timers: usize,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulated {:.2}s", self.elapsed)?;
        writeln!(
            f,
            "Global sweeps: {} requested, {} debounced, {} run",
            self.stats.global_requested, self.stats.global_debounced, self.stats.sweeps
        )?;
        writeln!(f, "Single checks: {}", self.stats.single_checks)?;
        writeln!(f, "Weapons removed: {}", self.stats.removed)?;
        writeln!(f, "Pending timers: {}", self.pending_timers)?;
        if self.ground_weapons.is_empty() {
            write!(f, "Ground weapons: none")
        } else {
            write!(f, "Ground weapons: {}", self.ground_weapons.join(", "))
        }
    }
}

pub struct MatchSim {
    world: World,
    schedule: Schedule,
    tick_seconds: f32,
    players: FxHashMap<String, Entity>,
    weapons: FxHashMap<String, Entity>,
}

impl MatchSim {
    pub fn new(config: &SweepConfig) -> Self {
        let mut schedule = Schedule::default();
        schedule.add_systems(update_cleanup_timers);
        MatchSim {
            world: game::setup_world(config),
            schedule,
            tick_seconds: config.tick_seconds(),
            players: FxHashMap::default(),
            weapons: FxHashMap::default(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn elapsed(&self) -> f64 {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn stats(&self) -> SweepStats {
        self.world.resource::<Sweeper>().0.stats()
    }

    /// Whether the plugin has a global sweep queued.
    pub fn sweep_pending(&self) -> bool {
        self.world.resource::<Sweeper>().0.scheduler().is_pending()
    }

    /// The pawn of a connected player.
    pub fn player(&self, name: &str) -> Option<Entity> {
        self.players
            .get(name)
            .copied()
            .filter(|entity| self.world.get::<Player>(*entity).is_some())
    }

    pub fn weapon(&self, id: &str) -> Option<Entity> {
        self.weapons.get(id).copied()
    }

    /// Whether the weapon registered as `id` still exists.
    pub fn weapon_exists(&self, id: &str) -> bool {
        self.weapon(id)
            .is_some_and(|weapon| self.world.get_entity(weapon).is_ok())
    }

    /// Advance the world by one tick.
    pub fn tick(&mut self) {
        update_world_time(&mut self.world, self.tick_seconds);
        self.schedule.run(&mut self.world);
    }

    /// Tick until the clock reaches `time`.
    ///
    /// The number of ticks is worked out up front, so the loop ends even when
    /// one tick is too small to move the clock.
    pub fn advance_to(&mut self, time: f64) {
        let remaining = time - self.elapsed();
        if remaining <= TIME_EPSILON {
            return;
        }
        let ticks = ((remaining - TIME_EPSILON) / f64::from(self.tick_seconds)).ceil() as u64;
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Tick for `seconds` of match time.
    pub fn advance(&mut self, seconds: f64) {
        let target = self.elapsed() + seconds;
        self.advance_to(target);
    }

    pub fn pending_timers(&mut self) -> usize {
        self.world
            .query::<&CleanupTimer>()
            .iter(&self.world)
            .count()
    }

    pub fn ground_weapons(&mut self) -> Vec<String> {
        game::ground_weapons(&mut self.world)
    }

    fn lookup_player(&self, name: &str) -> Result<Entity, String> {
        self.players
            .get(name)
            .copied()
            .ok_or_else(|| format!("Unknown player '{}'", name))
    }

    /// A known player's pawn, or `None` once that player has disconnected.
    fn live_player(&self, name: &str) -> Result<Option<Entity>, String> {
        self.lookup_player(name)?;
        Ok(self.player(name))
    }

    fn lookup_weapon(&self, id: &str) -> Result<Entity, String> {
        self.weapon(id)
            .ok_or_else(|| format!("Unknown weapon '{}'", id))
    }

    /// Apply one host action now.
    ///
    /// Referring to a player or weapon id never created is an error. Acting on
    /// a player or weapon that was created but has since gone away is not.
    pub fn apply(&mut self, action: &Action) -> Result<(), String> {
        match action {
            Action::RoundStart => game::start_round(&mut self.world),
            Action::SpawnPlayer { player, loadout } => {
                // A disconnected player reconnects as a fresh pawn
                let entity = match self.player(player) {
                    Some(entity) => {
                        game::respawn_player(&mut self.world, entity);
                        entity
                    }
                    None => {
                        let entity = game::spawn_player(&mut self.world, player);
                        self.players.insert(player.clone(), entity);
                        entity
                    }
                };
                for weapon in loadout {
                    let id = format!("{}/{}", player, weapon);
                    let spawned = game::spawn_weapon(&mut self.world, weapon, Some(entity));
                    self.weapons.insert(id, spawned);
                }
            }
            Action::SpawnWeapon { id, weapon, owner } => {
                let owner = match owner.as_deref() {
                    Some(name) => {
                        let live = self.live_player(name)?;
                        if live.is_none() {
                            debug!("'{}' has disconnected, '{}' spawns on the ground", name, id);
                        }
                        live
                    }
                    None => None,
                };
                let spawned = game::spawn_weapon(&mut self.world, weapon, owner);
                self.weapons.insert(id.clone(), spawned);
            }
            Action::Drop { weapon } => {
                let entity = self.lookup_weapon(weapon)?;
                if !game::drop_weapon(&mut self.world, entity) {
                    debug!("Weapon '{}' was not held, nothing to drop", weapon);
                }
            }
            Action::PickUp { player, weapon } => {
                let player_entity = self.lookup_player(player)?;
                let weapon_entity = self.lookup_weapon(weapon)?;
                if !game::pick_up_weapon(&mut self.world, player_entity, weapon_entity) {
                    debug!("'{}' could not pick up '{}', already gone", player, weapon);
                }
            }
            Action::Disconnect { player } => {
                let entity = self.lookup_player(player)?;
                if !game::despawn_player(&mut self.world, entity) {
                    debug!("'{}' already disconnected", player);
                }
            }
        }
        Ok(())
    }

    /// Replay a scenario from the current time and report the result.
    ///
    /// Action times are relative to the clock when the replay starts.
    pub fn run(&mut self, scenario: &Scenario) -> Result<SimReport, String> {
        info!(
            "Running scenario '{}' ({} actions)",
            scenario.name,
            scenario.actions.len()
        );
        let origin = self.elapsed();
        for timed in &scenario.actions {
            self.advance_to(origin + f64::from(timed.at));
            self.apply(&timed.action)?;
        }
        self.advance(f64::from(scenario.tail));
        Ok(self.report())
    }

    pub fn report(&mut self) -> SimReport {
        SimReport {
            elapsed: self.elapsed(),
            stats: self.stats(),
            ground_weapons: self.ground_weapons(),
            pending_timers: self.pending_timers(),
        }
    }
}
