use glam::Vec2;

use crate::config::FusionConfig;

/// Outcome of the floor check for one particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloorContact {
    /// Still above the floor.
    Clear,
    /// Hit the floor and rebounded.
    Bounced,
    /// Hit the floor with a rebound too small to keep; vertical motion stopped.
    Resting,
}

/// Keep a particle of `radius` on or above the vessel floor.
///
/// On contact the particle is clamped to the floor, its vertical velocity is
/// reversed with heavy loss and its horizontal velocity is rubbed down.
pub fn settle_on_floor(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    config: &FusionConfig,
) -> FloorContact {
    let floor = config.floor_for(radius);
    if pos.y <= floor {
        return FloorContact::Clear;
    }
    pos.y = floor;
    vel.y *= -config.floor_restitution;
    vel.x *= config.floor_friction;
    if vel.y.abs() < config.rest_speed {
        vel.y = 0.0;
        FloorContact::Resting
    } else {
        FloorContact::Bounced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_impact_bounces() {
        let config = FusionConfig::default();
        let mut p = Vec2::new(50.0, config.height + 5.0);
        let mut v = Vec2::new(2.0, 10.0);
        let contact = settle_on_floor(&mut p, &mut v, 20.0, &config);
        assert_eq!(contact, FloorContact::Bounced);
        assert_eq!(p.y, config.height - 10.0);
        assert!((v.y + 1.5).abs() < 1e-5);
        assert!((v.x - 1.8).abs() < 1e-5);
    }

    #[test]
    fn test_slow_impact_rests() {
        let config = FusionConfig::default();
        let mut p = Vec2::new(50.0, config.height);
        let mut v = Vec2::new(0.0, 1.0);
        assert_eq!(settle_on_floor(&mut p, &mut v, 20.0, &config), FloorContact::Resting);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_above_floor_clear() {
        let config = FusionConfig::default();
        let mut p = Vec2::new(50.0, 100.0);
        let mut v = Vec2::new(0.0, 1.0);
        assert_eq!(settle_on_floor(&mut p, &mut v, 20.0, &config), FloorContact::Clear);
        assert_eq!(v, Vec2::new(0.0, 1.0));
    }
}
