//! Cleanup timer expiration events.
//!
//! When a [`CleanupTimer`](crate::components::cleanuptimer::CleanupTimer)
//! runs out, [`CleanupTimerEvent`] is triggered with the task it carried.
//!
//! # Related
//!
//! - [`crate::systems::cleanuptimer::update_cleanup_timers`] – emits these events
//! - [`crate::systems::cleanuptimer::cleanup_timer_observer`] – runs the task

use bevy_ecs::prelude::*;

use crate::sweeper::CleanupTask;

/// Event emitted when a cleanup timer expires.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupTimerEvent {
    /// The task to run now.
    pub task: CleanupTask<Entity>,
}
