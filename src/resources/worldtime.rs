use bevy_ecs::prelude::Resource;

/// Wall-clock time and frame counter.
///
/// Game logic steps once per frame; this is only read by the debug overlay.
#[derive(Resource, Clone, Copy, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frames: u64,
}
