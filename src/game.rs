//! High-level world setup and host actions.
//!
//! These helpers act like the game server would: they create and destroy
//! players and weapons, move weapons between hands and the ground, and
//! announce those changes through the events the plugin listens to.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::designername::DesignerName;
use crate::components::player::Player;
use crate::components::weapon::{OwnedBy, Weapon};
use crate::events::entityspawned::EntitySpawnedEvent;
use crate::events::round::{PlayerSpawnEvent, RoundStartEvent};
use crate::resources::sweepconfig::SweepConfig;
use crate::resources::sweeper::Sweeper;
use crate::resources::worldtime::WorldTime;
use crate::sweeper::plugin::PLUGIN_INFO;
use crate::systems::plugin::install_observers;

/// Designer name given to player pawns.
pub const PLAYER_DESIGNER_NAME: &str = "player";

/// Build a world with the plugin loaded from `config`.
pub fn setup_world(config: &SweepConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Sweeper(config.build_plugin()));
    world.insert_resource(config.clone());
    install_observers(&mut world);
    info!("Loaded {} v{}", PLUGIN_INFO.name, PLUGIN_INFO.version);
    world
}

/// Announce a new round.
pub fn start_round(world: &mut World) {
    info!("Round started");
    world.trigger(RoundStartEvent);
    world.flush();
}

/// Create a player pawn and announce its spawn.
pub fn spawn_player(world: &mut World, name: &str) -> Entity {
    let player = world
        .spawn((Player::new(name), DesignerName::new(PLAYER_DESIGNER_NAME)))
        .id();
    world.trigger(EntitySpawnedEvent { entity: player });
    world.flush();
    respawn_player(world, player);
    player
}

/// Announce that an existing player pawn spawned again.
pub fn respawn_player(world: &mut World, player: Entity) {
    debug!("Player {:?} spawning", player);
    world.trigger(PlayerSpawnEvent { player });
    world.flush();
}

/// Remove a player. Weapons it held keep a stale owner link.
pub fn despawn_player(world: &mut World, player: Entity) -> bool {
    if world.get::<Player>(player).is_none() {
        return false;
    }
    world.despawn(player)
}

/// Create a weapon, optionally in a player's hands, and announce it.
pub fn spawn_weapon(world: &mut World, designer_name: &str, owner: Option<Entity>) -> Entity {
    let mut entity = world.spawn((Weapon, DesignerName::new(designer_name)));
    if let Some(owner) = owner {
        entity.insert(OwnedBy(owner));
    }
    let weapon = entity.id();
    world.trigger(EntitySpawnedEvent { entity: weapon });
    world.flush();
    weapon
}

/// Put a held weapon on the ground. Returns `false` if it was not held.
pub fn drop_weapon(world: &mut World, weapon: Entity) -> bool {
    let Ok(mut entity) = world.get_entity_mut(weapon) else {
        return false;
    };
    entity.take::<OwnedBy>().is_some()
}

/// Give a weapon to a player. Both must exist.
pub fn pick_up_weapon(world: &mut World, player: Entity, weapon: Entity) -> bool {
    if world.get::<Player>(player).is_none() || world.get::<Weapon>(weapon).is_none() {
        return false;
    }
    world.entity_mut(weapon).insert(OwnedBy(player));
    true
}

/// Whether the weapon has a live owner.
pub fn is_held(world: &World, weapon: Entity) -> bool {
    world
        .get::<OwnedBy>(weapon)
        .is_some_and(|owner| world.get_entity(owner.0).is_ok())
}

/// Designer names of every weapon not held by a live player, sorted.
pub fn ground_weapons(world: &mut World) -> Vec<String> {
    let mut query = world.query_filtered::<(Entity, &DesignerName), With<Weapon>>();
    let world: &World = world;
    let mut names: Vec<String> = query
        .iter(world)
        .filter(|(entity, _)| !is_held(world, *entity))
        .map(|(_, name)| name.0.clone())
        .collect();
    names.sort();
    names
}
