//! Player avatar components.

use bevy_ecs::prelude::Component;

/// Horizontal facing of the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Walk-cycle amount added per frame of horizontal movement.
pub const WALK_STEP: f32 = 0.15;
/// Peak vertical hop of the walk cycle, in map units.
pub const HOP_HEIGHT: f32 = 10.0;

/// The player-controlled sprite.
///
/// The entity's [`MapPosition`](super::mapposition::MapPosition) is the
/// centre of a `size × size` sprite.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player {
    pub size: f32,
    pub facing: Facing,
    /// Walk-cycle phase. Grows while walking, zero when idle.
    pub walk_time: f32,
}

impl Player {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            facing: Facing::Right,
            walk_time: 0.0,
        }
    }

    pub fn half(&self) -> f32 {
        self.size * 0.5
    }

    /// Vertical lift applied when drawing. Purely visual.
    pub fn hop(&self) -> f32 {
        self.walk_time.sin() * HOP_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_player_has_no_hop() {
        let p = Player::new(750.0);
        assert_eq!(p.hop(), 0.0);
        assert_eq!(p.half(), 375.0);
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_hop_peaks_at_quarter_cycle() {
        let mut p = Player::new(100.0);
        p.walk_time = std::f32::consts::FRAC_PI_2;
        assert!((p.hop() - HOP_HEIGHT).abs() < 1e-4);
    }
}
