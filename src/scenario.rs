//! Scripted match scenarios.
//!
//! A [`Scenario`] is a list of host actions, each stamped with the match time
//! (in seconds) at which it happens. [`MatchSim`](crate::matchsim::MatchSim)
//! replays it tick by tick.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "name": "pistol round",
//!   "tail": 1.0,
//!   "actions": [
//!     { "at": 0.0, "action": "round_start" },
//!     { "at": 0.05, "action": "spawn_player", "player": "alice", "loadout": ["weapon_knife", "weapon_glock"] },
//!     { "at": 0.1, "action": "spawn_weapon", "id": "ak", "weapon": "weapon_ak47" },
//!     { "at": 0.2, "action": "pick_up", "player": "alice", "weapon": "ak" },
//!     { "at": 1.0, "action": "drop", "weapon": "ak" },
//!     { "at": 2.0, "action": "disconnect", "player": "alice" }
//!   ]
//! }
//! ```
//!
//! Loadout weapons are addressable as `"<player>/<designer name>"`, e.g.
//! `"alice/weapon_glock"`.

use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TAIL_SECONDS: f32 = 1.0;
/// Longest match time a scenario may script, one day.
pub const MAX_SCENARIO_SECONDS: f32 = 86_400.0;
const ROUND_SECONDS: f32 = 4.0;
const DEFAULT_LOADOUT: [&str; 2] = ["weapon_knife", "weapon_glock"];
const BUY_POOL: [&str; 8] = [
    "weapon_ak47",
    "weapon_m4a1",
    "weapon_awp",
    "weapon_deagle",
    "weapon_mp9",
    "weapon_nova",
    "weapon_famas",
    "weapon_galilar",
];

fn default_tail() -> f32 {
    DEFAULT_TAIL_SECONDS
}

/// One host action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    RoundStart,
    /// Spawn a player, or respawn one that already exists.
    SpawnPlayer {
        player: String,
        #[serde(default)]
        loadout: Vec<String>,
    },
    SpawnWeapon {
        id: String,
        weapon: String,
        #[serde(default)]
        owner: Option<String>,
    },
    Drop {
        weapon: String,
    },
    PickUp {
        player: String,
        weapon: String,
    },
    Disconnect {
        player: String,
    },
}

/// An action and the match time it happens at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedAction {
    pub at: f32,
    #[serde(flatten)]
    pub action: Action,
}

impl TimedAction {
    pub fn new(at: f32, action: Action) -> Self {
        TimedAction { at, action }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    /// Seconds to keep simulating after the last action.
    #[serde(default = "default_tail")]
    pub tail: f32,
    pub actions: Vec<TimedAction>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, actions: Vec<TimedAction>) -> Self {
        Scenario {
            name: name.into(),
            tail: DEFAULT_TAIL_SECONDS,
            actions,
        }
    }

    /// Parse a scenario from JSON and order its actions by time.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut scenario: Scenario =
            serde_json::from_str(json).map_err(|e| format!("Invalid scenario: {}", e))?;
        scenario.validate()?;
        scenario.sort();
        Ok(scenario)
    }

    /// Load a scenario from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to encode scenario: {}", e))
    }

    fn validate(&self) -> Result<(), String> {
        if !(0.0..=MAX_SCENARIO_SECONDS).contains(&self.tail) {
            return Err(format!("Invalid tail duration {}", self.tail));
        }
        for (i, timed) in self.actions.iter().enumerate() {
            if !(0.0..=MAX_SCENARIO_SECONDS).contains(&timed.at) {
                return Err(format!("Action {} has invalid time {}", i, timed.at));
            }
        }
        Ok(())
    }

    /// Stable sort by time, so simultaneous actions keep their file order.
    pub fn sort(&mut self) {
        self.actions.sort_by(|a, b| a.at.total_cmp(&b.at));
    }

    /// Time of the last action.
    pub fn duration(&self) -> f32 {
        self.actions.iter().map(|a| a.at).fold(0.0, f32::max)
    }

    /// Generate a reproducible match of `rounds` rounds with `players` players.
    ///
    /// Every round starts with a round start and a respawn of each player with
    /// the default loadout. Players then buy weapons, drop some of them, and
    /// occasionally pick up what others dropped. The first player carries the
    /// objective and drops it mid-round.
    pub fn random(seed: u64, rounds: u32, players: u32) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut actions = Vec::new();
        let mut next_id = 0u32;
        let names: Vec<String> = (1..=players).map(|i| format!("player{}", i)).collect();

        for round in 0..rounds {
            let start = round as f32 * ROUND_SECONDS;
            actions.push(TimedAction::new(start, Action::RoundStart));

            for name in &names {
                actions.push(TimedAction::new(
                    start + rng.f32() * 0.2,
                    Action::SpawnPlayer {
                        player: name.clone(),
                        loadout: DEFAULT_LOADOUT.iter().map(|w| w.to_string()).collect(),
                    },
                ));
            }

            if let Some(carrier) = names.first() {
                let id = format!("c4-{}", round);
                actions.push(TimedAction::new(
                    start + 0.3,
                    Action::SpawnWeapon {
                        id: id.clone(),
                        weapon: "weapon_c4".to_string(),
                        owner: Some(carrier.clone()),
                    },
                ));
                actions.push(TimedAction::new(
                    start + 1.0 + rng.f32() * 2.0,
                    Action::Drop { weapon: id },
                ));
            }

            for name in &names {
                if !rng.bool() {
                    continue;
                }
                next_id += 1;
                let id = format!("w{}", next_id);
                let bought_at = start + 0.5 + rng.f32();
                actions.push(TimedAction::new(
                    bought_at,
                    Action::SpawnWeapon {
                        id: id.clone(),
                        weapon: BUY_POOL[rng.usize(..BUY_POOL.len())].to_string(),
                        owner: Some(name.clone()),
                    },
                ));
                if rng.u8(..4) == 0 {
                    continue;
                }
                let dropped_at = bought_at + 0.5 + rng.f32() * 2.0;
                actions.push(TimedAction::new(dropped_at, Action::Drop { weapon: id.clone() }));
                if names.len() > 1 && rng.u8(..3) == 0 {
                    let taker = &names[rng.usize(..names.len())];
                    actions.push(TimedAction::new(
                        dropped_at + 0.1,
                        Action::PickUp {
                            player: taker.clone(),
                            weapon: id,
                        },
                    ));
                }
            }
        }

        let mut scenario = Scenario::new(format!("random-{}", seed), actions);
        scenario.sort();
        scenario
    }
}
