//! Cleanup timer systems.
//!
//! - [`update_cleanup_timers`] – counts timers down and emits events when they expire
//! - [`cleanup_timer_observer`] – hands the expired task to the plugin
//!
//! # System Flow
//!
//! Each tick:
//!
//! 1. `update_cleanup_timers` subtracts the tick delta from every
//!    [`CleanupTimer`](crate::components::cleanuptimer::CleanupTimer)
//! 2. Expired timer entities are despawned and a `CleanupTimerEvent` is triggered
//! 3. `cleanup_timer_observer` queues an exclusive command that runs
//!    [`DeleteWeapons::on_timer`](crate::sweeper::plugin::DeleteWeapons::on_timer)
//!    against the world
//!
//! Timers are fire-once; nothing is reset or cancelled.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::cleanuptimer::CleanupTimer;
use crate::events::cleanuptimer::CleanupTimerEvent;
use crate::resources::worldtime::WorldTime;
use crate::systems::plugin::run_plugin;

/// Count down cleanup timers and fire the expired ones.
pub fn update_cleanup_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut CleanupTimer)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut timer) in query.iter_mut() {
        if timer.tick(dt) {
            commands.entity(entity).despawn();
            commands.trigger(CleanupTimerEvent { task: timer.task });
        }
    }
}

/// Run the plugin's timer handler for an expired cleanup timer.
pub fn cleanup_timer_observer(trigger: On<CleanupTimerEvent>, mut commands: Commands) {
    let task = trigger.event().task;
    commands.queue(move |world: &mut World| {
        trace!("Cleanup timer fired: {:?}", task);
        run_plugin(world, |plugin, host| plugin.on_timer(host, task));
    });
}
