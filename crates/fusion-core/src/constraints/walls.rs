use glam::Vec2;

/// Bounce off the side walls of a vessel spanning `[0, width]`.
///
/// Reverses and scales the horizontal velocity by `restitution` and clamps
/// the position back inside. Returns whether a wall was hit.
pub fn reflect_walls(pos: &mut Vec2, vel: &mut Vec2, width: f32, restitution: f32) -> bool {
    if pos.x >= 0.0 && pos.x <= width {
        return false;
    }
    vel.x *= -restitution;
    pos.x = pos.x.clamp(0.0, width);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_untouched() {
        let mut p = Vec2::new(10.0, 0.0);
        let mut v = Vec2::new(3.0, 1.0);
        assert!(!reflect_walls(&mut p, &mut v, 100.0, 0.6));
        assert_eq!(v, Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_right_wall_reflects_with_loss() {
        let mut p = Vec2::new(104.0, 0.0);
        let mut v = Vec2::new(5.0, 1.0);
        assert!(reflect_walls(&mut p, &mut v, 100.0, 0.6));
        assert_eq!(p.x, 100.0);
        assert!((v.x + 3.0).abs() < 1e-6);
        assert_eq!(v.y, 1.0);
    }

    #[test]
    fn test_left_wall_clamps_to_zero() {
        let mut p = Vec2::new(-2.0, 7.0);
        let mut v = Vec2::new(-1.0, 0.0);
        reflect_walls(&mut p, &mut v, 100.0, 0.6);
        assert_eq!(p.x, 0.0);
        assert!(v.x > 0.0);
    }
}
