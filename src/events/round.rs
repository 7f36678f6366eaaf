//! Round flow notifications.
//!
//! Both events carry nothing the cleanup plugin needs; they only tell it
//! that a sweep is due. The observers in
//! [`crate::systems::plugin`] forward them to
//! [`DeleteWeapons`](crate::sweeper::plugin::DeleteWeapons).

use bevy_ecs::prelude::*;

/// A new round has started.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStartEvent;

/// A player pawn has (re)spawned.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpawnEvent {
    /// The spawned player.
    pub player: Entity,
}
