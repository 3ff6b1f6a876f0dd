use glam::Vec2;

use crate::config::FusionConfig;

/// Gravity in air, viscous damping in the liquid.
///
/// A particle is in the liquid once it is at or below `surface`
/// (screen y grows downward).
pub fn apply_medium(pos: Vec2, vel: Vec2, surface: f32, config: &FusionConfig) -> Vec2 {
    if pos.y < surface {
        Vec2::new(vel.x, vel.y + config.gravity)
    } else {
        Vec2::new(vel.x * config.liquid_damping_x, vel.y * config.liquid_damping_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_above_surface() {
        let config = FusionConfig::default();
        let v = apply_medium(Vec2::new(10.0, 50.0), Vec2::new(1.0, 2.0), 300.0, &config);
        assert_eq!(v, Vec2::new(1.0, 2.0 + config.gravity));
    }

    #[test]
    fn test_damping_in_liquid() {
        let config = FusionConfig::default();
        let v = apply_medium(Vec2::new(10.0, 300.0), Vec2::new(1.0, 2.0), 300.0, &config);
        assert!((v.x - 0.95).abs() < 1e-6);
        assert!((v.y - 1.84).abs() < 1e-6);
        assert!(v.y / 2.0 < v.x / 1.0, "vertical should be damped harder");
    }
}
