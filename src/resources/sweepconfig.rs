//! Cleanup configuration resource.
//!
//! Settings loaded from an INI file. Every key is optional; anything missing
//! keeps its default, so a missing file simply means "run with defaults".
//!
//! # Configuration File Format
//!
//! ```ini
//! [cleanup]
//! delay = 0.25
//! prefix = weapon_
//! objective = weapon_c4
//!
//! [simulation]
//! tick_rate = 64
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::sweeper::filter::WeaponFilter;
use crate::sweeper::plugin::DeleteWeapons;
use crate::sweeper::scheduler::CleanupScheduler;
use crate::sweeper::{CLEANUP_DELAY_SECONDS, OBJECTIVE_WEAPON, WEAPON_PREFIX};

const DEFAULT_TICK_RATE: u32 = 64;
const DEFAULT_CONFIG_PATH: &str = "./deleteweapons.ini";

/// Cleanup and simulation settings.
#[derive(Resource, Debug, Clone)]
pub struct SweepConfig {
    /// Seconds between a trigger and the cleanup it schedules.
    pub delay: f32,
    /// Designer-name prefix identifying weapons.
    pub prefix: String,
    /// Objective weapon that is never removed.
    pub objective: String,
    /// Simulated server ticks per second.
    pub tick_rate: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            delay: CLEANUP_DELAY_SECONDS,
            prefix: WEAPON_PREFIX.to_string(),
            objective: OBJECTIVE_WEAPON.to_string(),
            tick_rate: DEFAULT_TICK_RATE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing or malformed values retain their current values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [cleanup] section
        if let Some(delay) = config.getfloat("cleanup", "delay").ok().flatten()
            && delay >= 0.0
        {
            self.delay = delay as f32;
        }
        if let Some(prefix) = config.get("cleanup", "prefix")
            && !prefix.is_empty()
        {
            self.prefix = prefix;
        }
        if let Some(objective) = config.get("cleanup", "objective")
            && !objective.is_empty()
        {
            self.objective = objective;
        }

        // [simulation] section
        if let Some(rate) = config
            .getuint("simulation", "tick_rate")
            .ok()
            .flatten()
            .and_then(|rate| u32::try_from(rate).ok())
            .filter(|rate| *rate > 0)
        {
            self.tick_rate = rate;
        }

        info!(
            "Loaded config: delay={:.2}s, prefix={}, objective={}, tick_rate={}",
            self.delay, self.prefix, self.objective, self.tick_rate
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("cleanup", "delay", Some(self.delay.to_string()));
        config.set("cleanup", "prefix", Some(self.prefix.clone()));
        config.set("cleanup", "objective", Some(self.objective.clone()));
        config.set("simulation", "tick_rate", Some(self.tick_rate.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Seconds per simulated tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Build a plugin instance from these settings.
    pub fn build_plugin(&self) -> DeleteWeapons {
        DeleteWeapons::new(
            CleanupScheduler::new(self.delay),
            WeaponFilter::new(self.prefix.clone(), [self.objective.as_str()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("deleteweapons-{}-{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = SweepConfig::new();
        assert!((config.delay - 0.25).abs() < EPSILON);
        assert_eq!(config.prefix, "weapon_");
        assert_eq!(config.objective, "weapon_c4");
        assert_eq!(config.tick_rate, 64);
        assert!((config.tick_seconds() - 0.015625).abs() < EPSILON);
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config = SweepConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert!((config.delay - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_partial_file_overrides_present_keys() {
        let path = temp_path("partial");
        std::fs::write(&path, "[cleanup]\ndelay = 0.5\n\n[simulation]\ntick_rate = 128\n").unwrap();

        let mut config = SweepConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert!((config.delay - 0.5).abs() < EPSILON);
        assert_eq!(config.tick_rate, 128);
        assert_eq!(config.prefix, "weapon_");
        assert_eq!(config.objective, "weapon_c4");
    }

    #[test]
    fn test_out_of_range_tick_rate_keeps_default() {
        let path = temp_path("tickrate");
        std::fs::write(&path, "[simulation]\ntick_rate = 4294967296\n").unwrap();

        let mut config = SweepConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.tick_rate, 64);
        assert!((config.tick_seconds() - 0.015625).abs() < EPSILON);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let mut original = SweepConfig::with_path(&path);
        original.delay = 1.0;
        original.objective = "weapon_healthshot".to_string();
        original.save_to_file().unwrap();

        let mut loaded = SweepConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert!((loaded.delay - 1.0).abs() < EPSILON);
        assert_eq!(loaded.objective, "weapon_healthshot");
    }

    #[test]
    fn test_build_plugin_uses_settings() {
        let mut config = SweepConfig::new();
        config.delay = 0.75;
        let plugin = config.build_plugin();
        assert!((plugin.scheduler().delay() - 0.75).abs() < EPSILON);
        assert!(plugin.filter().is_excluded("WEAPON_C4"));
        assert_eq!(plugin.filter().prefix(), "weapon_");
    }
}
