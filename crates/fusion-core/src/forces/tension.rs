use glam::Vec2;

use crate::tables::FrictionTension;

/// Ripple and fracture disturbance for a friction droplet.
///
/// The ripple acts everywhere; the vertical fracture only once the droplet
/// is below the liquid surface.
pub fn compute_tension(pos: Vec2, time: f32, tension: &FrictionTension, submerged: bool) -> Vec2 {
    let ripple = (time * 3.0 + pos.x * 0.03).sin() * tension.ripple * 0.5;
    let fracture = if submerged {
        (time * 2.0 + pos.y * 0.02).cos() * tension.fracture * 0.3
    } else {
        0.0
    };
    Vec2::new(ripple, fracture)
}
