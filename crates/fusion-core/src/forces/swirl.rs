use glam::Vec2;
use rand::Rng;

use crate::tables::RhythmFlow;

/// Horizontal swirl for a particle inside the liquid.
///
/// A standing sine wave across the vessel that drifts slowly with time.
pub fn compute_swirl(pos: Vec2, time: f32, flow: &RhythmFlow) -> f32 {
    (time * 0.5 + pos.x * 0.02).sin() * flow.swirl * 2.0
}

/// Occasional random kick. Zero unless the draw lands under `probability`.
pub fn turbulence_impulse<R: Rng + ?Sized>(
    flow: &RhythmFlow,
    probability: f32,
    rng: &mut R,
) -> Vec2 {
    if rng.gen::<f32>() >= probability {
        return Vec2::ZERO;
    }
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * flow.turbulence * 2.0,
        (rng.gen::<f32>() - 0.5) * flow.turbulence,
    )
}
