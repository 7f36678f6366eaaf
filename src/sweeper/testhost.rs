//! In-memory host used by the core's unit tests.

use super::CleanupTask;
use super::host::{EntityAccess, TimerQueue};

#[derive(Debug, Clone)]
struct FakeEntity {
    name: Option<String>,
    owner: Option<usize>,
    weapon: bool,
}

/// Entities live in a slot vector; a destroyed slot becomes `None` and its
/// index acts as a stale handle.
#[derive(Debug, Default)]
pub struct FakeWorld {
    entities: Vec<Option<FakeEntity>>,
    pub removed: Vec<usize>,
    pub timers: Vec<(f32, CleanupTask<usize>)>,
}

impl FakeWorld {
    fn push(&mut self, entity: FakeEntity) -> usize {
        self.entities.push(Some(entity));
        self.entities.len() - 1
    }

    pub fn spawn_weapon(&mut self, name: &str) -> usize {
        self.push(FakeEntity {
            name: Some(name.to_string()),
            owner: None,
            weapon: true,
        })
    }

    pub fn spawn_unnamed_weapon(&mut self) -> usize {
        self.push(FakeEntity {
            name: None,
            owner: None,
            weapon: true,
        })
    }

    pub fn spawn_player(&mut self) -> usize {
        self.push(FakeEntity {
            name: Some("player".to_string()),
            owner: None,
            weapon: false,
        })
    }

    pub fn spawn_prop(&mut self, name: &str) -> usize {
        self.push(FakeEntity {
            name: Some(name.to_string()),
            owner: None,
            weapon: false,
        })
    }

    pub fn set_owner(&mut self, entity: usize, owner: Option<usize>) {
        if let Some(Some(e)) = self.entities.get_mut(entity) {
            e.owner = owner;
        }
    }

    pub fn destroy(&mut self, entity: usize) {
        if let Some(slot) = self.entities.get_mut(entity) {
            *slot = None;
        }
    }

    /// Remove and return every queued timer.
    pub fn take_timers(&mut self) -> Vec<(f32, CleanupTask<usize>)> {
        std::mem::take(&mut self.timers)
    }

    fn get(&self, entity: usize) -> Option<&FakeEntity> {
        self.entities.get(entity).and_then(|e| e.as_ref())
    }
}

impl EntityAccess for FakeWorld {
    type Handle = usize;

    fn is_valid(&self, entity: usize) -> bool {
        self.get(entity).is_some()
    }

    fn designer_name(&self, entity: usize) -> Option<&str> {
        self.get(entity).and_then(|e| e.name.as_deref())
    }

    fn owner(&self, entity: usize) -> Option<usize> {
        self.get(entity).and_then(|e| e.owner)
    }

    fn is_weapon(&self, entity: usize) -> bool {
        self.get(entity).is_some_and(|e| e.weapon)
    }

    fn find_by_designer_prefix(&mut self, prefix: &str) -> Vec<usize> {
        self.entities
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (i, e)))
            .filter(|(_, e)| e.weapon && e.name.as_deref().is_some_and(|n| n.starts_with(prefix)))
            .map(|(i, _)| i)
            .collect()
    }

    fn remove(&mut self, entity: usize) {
        if self.is_valid(entity) {
            self.removed.push(entity);
            self.destroy(entity);
        }
    }
}

impl TimerQueue for FakeWorld {
    type Entity = usize;

    fn schedule(&mut self, delay: f32, task: CleanupTask<usize>) {
        self.timers.push((delay, task));
    }
}
