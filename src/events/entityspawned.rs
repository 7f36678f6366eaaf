//! Entity creation notification.
//!
//! Triggered for every entity the simulated host creates, weapon or not.
//! Filtering happens in the plugin, like on a real server.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpawnedEvent {
    /// The newly created entity.
    pub entity: Entity,
}
