//! ECS implementation of the host services.
//!
//! [`EcsHost`] borrows the world for the duration of one plugin call and
//! answers the plugin's entity and timer requests from it. Handles are plain
//! [`Entity`] ids, so a stale handle simply fails the lookup.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::cleanuptimer::CleanupTimer;
use crate::components::designername::DesignerName;
use crate::components::weapon::{OwnedBy, Weapon};
use crate::sweeper::CleanupTask;
use crate::sweeper::host::{EntityAccess, TimerQueue};

pub struct EcsHost<'w> {
    world: &'w mut World,
}

impl<'w> EcsHost<'w> {
    pub fn new(world: &'w mut World) -> Self {
        EcsHost { world }
    }
}

impl EntityAccess for EcsHost<'_> {
    type Handle = Entity;

    fn is_valid(&self, entity: Entity) -> bool {
        self.world.get_entity(entity).is_ok()
    }

    fn designer_name(&self, entity: Entity) -> Option<&str> {
        self.world.get::<DesignerName>(entity).map(DesignerName::as_str)
    }

    fn owner(&self, entity: Entity) -> Option<Entity> {
        self.world.get::<OwnedBy>(entity).map(|owner| owner.0)
    }

    fn is_weapon(&self, entity: Entity) -> bool {
        self.world.get::<Weapon>(entity).is_some()
    }

    fn find_by_designer_prefix(&mut self, prefix: &str) -> Vec<Entity> {
        let mut query = self
            .world
            .query_filtered::<(Entity, &DesignerName), With<Weapon>>();
        query
            .iter(self.world)
            .filter(|(_, name)| name.as_str().starts_with(prefix))
            .map(|(entity, _)| entity)
            .collect()
    }

    fn remove(&mut self, entity: Entity) {
        if self.is_valid(entity) {
            trace!("Despawning {:?}", entity);
            self.world.despawn(entity);
        }
    }
}

impl TimerQueue for EcsHost<'_> {
    type Entity = Entity;

    fn schedule(&mut self, delay: f32, task: CleanupTask<Entity>) {
        self.world.spawn(CleanupTimer::new(delay, task));
    }
}
