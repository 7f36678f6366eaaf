//! Plugin instance resource.
//!
//! The simulated host keeps the single [`DeleteWeapons`] instance in the ECS
//! world. Observers reach it through
//! [`run_plugin`](crate::systems::plugin::run_plugin), which scopes it out of
//! the world so the plugin can borrow the rest of the world as its host.

use bevy_ecs::prelude::Resource;

use crate::sweeper::plugin::DeleteWeapons;

#[derive(Resource, Debug, Clone, Default)]
pub struct Sweeper(pub DeleteWeapons);
