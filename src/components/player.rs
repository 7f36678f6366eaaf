use bevy_ecs::prelude::Component;

/// A connected player pawn.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { name: name.into() }
    }
}
