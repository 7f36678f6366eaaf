//! Fire-once countdown carrying a cleanup task.
//!
//! Each scheduled cleanup lives as its own entity holding a [`CleanupTimer`].
//! The [`update_cleanup_timers`](crate::systems::cleanuptimer::update_cleanup_timers)
//! system counts it down; when it reaches zero the timer entity is despawned
//! and a [`CleanupTimerEvent`](crate::events::cleanuptimer::CleanupTimerEvent)
//! is triggered. Unlike a repeating timer it never resets.

use bevy_ecs::prelude::{Component, Entity};

use crate::sweeper::CleanupTask;

#[derive(Component, Debug, Clone, Copy)]
pub struct CleanupTimer {
    /// Remaining time in seconds before the task runs.
    pub remaining: f32,
    /// What to do when the timer fires.
    pub task: CleanupTask<Entity>,
}

impl CleanupTimer {
    pub fn new(delay: f32, task: CleanupTask<Entity>) -> Self {
        CleanupTimer {
            remaining: delay,
            task,
        }
    }

    /// Count down by `dt` seconds. Returns `true` once the timer has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}
