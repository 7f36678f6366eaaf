//! Host services consumed by the cleanup core.
//!
//! The game engine owns every entity; the core only holds `Copy` handles and
//! asks the host about them each time it needs to act. Implementations must
//! tolerate stale handles: every query on a destroyed entity answers as if
//! the entity were absent.

use std::fmt::Debug;

use super::CleanupTask;

/// Read and remove access to the host's entities.
pub trait EntityAccess {
    /// Non-owning entity reference.
    type Handle: Copy + Eq + Debug;

    /// Whether the handle still refers to a live entity.
    fn is_valid(&self, entity: Self::Handle) -> bool;

    /// Designer name of the entity, `None` when invalid or unnamed.
    fn designer_name(&self, entity: Self::Handle) -> Option<&str>;

    /// Entity currently owning (holding) this one, if any.
    ///
    /// The returned handle may itself be stale.
    fn owner(&self, entity: Self::Handle) -> Option<Self::Handle>;

    /// Whether the entity is of the host's weapon type.
    fn is_weapon(&self, entity: Self::Handle) -> bool;

    /// Live weapon-type entities whose designer name starts with `prefix`.
    fn find_by_designer_prefix(&mut self, prefix: &str) -> Vec<Self::Handle>;

    /// Destroy the entity. Must be a no-op for stale handles.
    fn remove(&mut self, entity: Self::Handle);
}

/// Fire-once delayed callbacks, run on the update thread.
pub trait TimerQueue {
    /// Entity reference carried by [`CleanupTask::Single`].
    type Entity: Copy;

    /// Run `task` once after `delay` seconds.
    fn schedule(&mut self, delay: f32, task: CleanupTask<Self::Entity>);
}
