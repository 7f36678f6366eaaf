use bevy_ecs::prelude::Resource;

/// Simulation clock of the host, in seconds.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f64,
    pub delta: f32,
    pub time_scale: f32,
    pub tick_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            tick_count: 0,
        }
    }
}
