//! Event wiring between the simulated host and the plugin.
//!
//! [`install_observers`] plays the role of a plugin's load hook: it
//! subscribes the plugin to round start, player spawn, entity creation and
//! cleanup timer events. Each observer queues an exclusive command, because
//! the plugin needs the whole world as its host while it runs.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::events::entityspawned::EntitySpawnedEvent;
use crate::events::round::{PlayerSpawnEvent, RoundStartEvent};
use crate::resources::sweeper::Sweeper;
use crate::sweeper::plugin::DeleteWeapons;
use crate::systems::cleanuptimer::cleanup_timer_observer;
use crate::systems::host::EcsHost;

/// Run `f` with the plugin instance and a host view of the rest of the world.
///
/// Returns `None` if no [`Sweeper`] resource is installed.
pub fn run_plugin<R>(
    world: &mut World,
    f: impl FnOnce(&mut DeleteWeapons, &mut EcsHost<'_>) -> R,
) -> Option<R> {
    if !world.contains_resource::<Sweeper>() {
        warn!("No Sweeper resource installed, ignoring plugin call");
        return None;
    }
    Some(world.resource_scope(|world, mut sweeper: Mut<Sweeper>| {
        let mut host = EcsHost::new(world);
        f(&mut sweeper.0, &mut host)
    }))
}

pub fn round_start_observer(_trigger: On<RoundStartEvent>, mut commands: Commands) {
    commands.queue(|world: &mut World| {
        run_plugin(world, |plugin, host| plugin.on_round_start(host));
    });
}

pub fn player_spawn_observer(trigger: On<PlayerSpawnEvent>, mut commands: Commands) {
    let player = trigger.event().player;
    commands.queue(move |world: &mut World| {
        debug!("Player {:?} spawned", player);
        run_plugin(world, |plugin, host| plugin.on_player_spawn(host));
    });
}

pub fn entity_spawned_observer(trigger: On<EntitySpawnedEvent>, mut commands: Commands) {
    let entity = trigger.event().entity;
    commands.queue(move |world: &mut World| {
        run_plugin(world, |plugin, host| plugin.on_entity_spawned(host, entity));
    });
}

/// Subscribe the plugin to every host notification it handles.
pub fn install_observers(world: &mut World) {
    world.add_observer(round_start_observer);
    world.add_observer(player_spawn_observer);
    world.add_observer(entity_spawned_observer);
    world.add_observer(cleanup_timer_observer);
    world.flush();
}
