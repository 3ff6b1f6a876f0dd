use crate::config::FusionConfig;
use crate::particle::ParticleSet;

/// Fill fraction the liquid is heading toward.
///
/// The share of all particles that have sunk past the settle line, capped at
/// `max_fill`. An empty vessel has nothing to fill and targets zero.
pub fn fill_target(particles: &ParticleSet, config: &FusionConfig) -> f32 {
    if particles.is_empty() {
        return 0.0;
    }
    let line = config.height * config.settle_line;
    let sunk = particles.position.iter().filter(|p| p.y > line).count();
    (sunk as f32 / particles.count as f32).min(config.max_fill)
}

/// Move `current` a fixed fraction of the way toward `target`.
pub fn smooth_toward(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Paint, Rgb};
    use crate::particle::{Layer, ParticleSeed};
    use glam::Vec2;

    fn set_with_heights(ys: &[f32]) -> ParticleSet {
        let mut set = ParticleSet::with_capacity(ys.len());
        for &y in ys {
            set.push(ParticleSeed {
                position: Vec2::new(10.0, y),
                velocity: Vec2::ZERO,
                radius: 10.0,
                paint: Paint::opaque(Rgb::BLACK),
                alpha: 1.0,
                layer: Layer::Motivation,
            });
        }
        set
    }

    #[test]
    fn test_empty_targets_zero() {
        assert_eq!(fill_target(&ParticleSet::default(), &FusionConfig::default()), 0.0);
    }

    #[test]
    fn test_target_counts_sunk_share() {
        let set = set_with_heights(&[0.0, 100.0, 400.0, 480.0]);
        assert!((fill_target(&set, &FusionConfig::default()) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_target_capped() {
        let set = set_with_heights(&[480.0; 8]);
        assert_eq!(fill_target(&set, &FusionConfig::default()), 0.85);
    }

    #[test]
    fn test_smoothing_never_overshoots() {
        let mut fill = 0.0;
        for _ in 0..10_000 {
            fill = smooth_toward(fill, 0.85, 0.02);
            assert!(fill <= 0.85);
        }
        assert!(fill > 0.84);
    }
}
