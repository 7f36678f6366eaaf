//! Weapon eligibility filter.
//!
//! [`WeaponFilter`] answers two questions about a single weapon handle:
//! whether the plugin manages it at all ([`WeaponFilter::is_managed`]) and,
//! if so, whether it is lying on the ground and should be removed
//! ([`WeaponFilter::remove_if_grounded`]). Both re-read entity state from the
//! host on every call.

use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::host::EntityAccess;
use super::{OBJECTIVE_WEAPON, WEAPON_PREFIX};

/// Decides which weapons a cleanup may remove.
#[derive(Debug, Clone)]
pub struct WeaponFilter {
    /// Case-sensitive designer-name prefix a weapon must carry.
    prefix: String,
    /// Lowercased designer names that are never removed.
    excluded: FxHashSet<String>,
}

impl Default for WeaponFilter {
    fn default() -> Self {
        Self::new(WEAPON_PREFIX, [OBJECTIVE_WEAPON])
    }
}

impl WeaponFilter {
    /// Create a filter with the given prefix and excluded designer names.
    ///
    /// Exclusions match case-insensitively.
    pub fn new<I, S>(prefix: impl Into<String>, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefix: prefix.into(),
            excluded: excluded
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Designer-name prefix used for matching and enumeration.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether `name` is in the excluded set, ignoring case.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(&name.to_lowercase())
    }

    /// Whether the weapon is one this plugin is allowed to clean up.
    ///
    /// Pure: never touches the world.
    pub fn is_managed<W: EntityAccess>(&self, world: &W, weapon: W::Handle) -> bool {
        if !world.is_valid(weapon) {
            return false;
        }
        let Some(name) = world.designer_name(weapon) else {
            return false;
        };
        if name.is_empty() || !name.starts_with(self.prefix.as_str()) {
            return false;
        }
        !self.is_excluded(name)
    }

    /// Remove the weapon if it is managed, still alive and not held.
    ///
    /// Returns `true` when a removal was requested from the host.
    pub fn remove_if_grounded<W: EntityAccess>(&self, world: &mut W, weapon: W::Handle) -> bool {
        if !self.is_managed(&*world, weapon) {
            trace!("Skipping unmanaged entity {:?}", weapon);
            return false;
        }
        if !world.is_valid(weapon) {
            return false;
        }
        if let Some(owner) = world.owner(weapon)
            && world.is_valid(owner)
        {
            trace!("Weapon {:?} is held by {:?}, keeping it", weapon, owner);
            return false;
        }

        debug!(
            "Removing ground weapon {:?} ({})",
            weapon,
            world.designer_name(weapon).unwrap_or_default()
        );
        world.remove(weapon);
        true
    }
}
