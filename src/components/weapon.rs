//! Weapon entities and their ownership.
//!
//! Every weapon carries the [`Weapon`] marker. A weapon held by a player also
//! carries [`OwnedBy`]; a weapon lying on the ground has none. `OwnedBy` is a
//! plain entity id and may outlive the player it points at (for example after
//! a disconnect), in which case the weapon counts as grounded.

use bevy_ecs::prelude::{Component, Entity};

/// Marker for entities of the host's weapon type.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Weapon;

/// The entity currently holding this weapon.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnedBy(pub Entity);
