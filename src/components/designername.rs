//! Engine class name of an entity, e.g. `weapon_ak47`.
use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct DesignerName(pub String);

impl DesignerName {
    pub fn new(name: impl Into<String>) -> Self {
        DesignerName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
