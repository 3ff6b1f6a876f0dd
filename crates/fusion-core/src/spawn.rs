//! Initial pour: one batch of droplets per answered dimension.

use glam::Vec2;
use rand::Rng;

use crate::answers::AnswerSet;
use crate::color::{Paint, Rgb};
use crate::config::FusionConfig;
use crate::particle::{Layer, ParticleSeed, ParticleSet};
use crate::tables::{FrictionTension, MotivationPalette, RhythmFlow, NEUTRAL_DROPLET};

/// `min + U * span` with `U` uniform in [0,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub span: f32,
}

impl Span {
    pub const fn new(min: f32, span: f32) -> Self {
        Self { min, span }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * self.span
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.min + self.span
    }
}

/// Fixed spawn shape for one layer. Answer-dependent terms (rhythm fall
/// speed, friction jitter) are resolved by [`LayerPour`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnProfile {
    pub count: usize,
    /// Droplets start up to this far above the top edge.
    pub pour_height: f32,
    /// Extra upward offset added after every spawned droplet.
    pub stagger: f32,
    pub fall_speed: Span,
    pub radius: Span,
    pub alpha: Span,
}

impl SpawnProfile {
    pub const MOTIVATION: Self = Self {
        count: 200,
        pour_height: 300.0,
        stagger: 0.5,
        fall_speed: Span::new(1.0, 1.5),
        radius: Span::new(15.0, 30.0),
        alpha: Span::new(0.5, 0.4),
    };

    /// `fall_speed.span` is replaced by the rhythm's drop speed.
    pub const RHYTHM: Self = Self {
        count: 120,
        pour_height: 400.0,
        stagger: 0.3,
        fall_speed: Span::new(0.8, 1.0),
        radius: Span::new(12.0, 25.0),
        alpha: Span::new(0.35, 0.35),
    };

    pub const FRICTION: Self = Self {
        count: 100,
        pour_height: 350.0,
        stagger: 0.2,
        fall_speed: Span::new(0.6, 1.8),
        radius: Span::new(10.0, 20.0),
        alpha: Span::new(0.25, 0.4),
    };

    pub const fn for_layer(layer: Layer) -> Self {
        match layer {
            Layer::Motivation => Self::MOTIVATION,
            Layer::Rhythm => Self::RHYTHM,
            Layer::Friction => Self::FRICTION,
        }
    }
}

/// Number of particles `initialize` produces for `answers`.
pub fn expected_count(answers: &AnswerSet) -> usize {
    answers
        .dimensions()
        .into_iter()
        .map(|d| SpawnProfile::for_layer(d.into()).count)
        .sum()
}

/// Build the particle batch for a new run.
///
/// Layers are spawned motivation, rhythm, friction. The stagger offset keeps
/// accumulating across layers so later layers pour in after earlier ones.
pub fn initialize<R: Rng + ?Sized>(
    answers: &AnswerSet,
    config: &FusionConfig,
    rng: &mut R,
) -> ParticleSet {
    let mut particles = ParticleSet::with_capacity(expected_count(answers));
    let mut stagger = 0.0;

    if let Some(motivation) = answers.motivation {
        let palette = motivation.palette();
        let pour = LayerPour::motivation();
        for _ in 0..pour.profile.count {
            let paint = Paint::opaque(pick_droplet_color(&palette, rng));
            particles.push(pour.droplet(paint, stagger, config, rng));
            stagger += pour.profile.stagger;
        }
    }

    if let Some(rhythm) = answers.rhythm {
        let pour = LayerPour::rhythm(&rhythm.flow());
        let color = answers
            .motivation
            .map(|m| m.palette().base)
            .unwrap_or(NEUTRAL_DROPLET);
        for _ in 0..pour.profile.count {
            particles.push(pour.droplet(Paint::opaque(color), stagger, config, rng));
            stagger += pour.profile.stagger;
        }
    }

    if let Some(friction) = answers.friction {
        let tension = friction.tension();
        let pour = LayerPour::friction(&tension);
        let paint = Paint::tinted(Rgb::BLACK, tension.darkness);
        for _ in 0..pour.profile.count {
            particles.push(pour.droplet(paint, stagger, config, rng));
            stagger += pour.profile.stagger;
        }
    }

    log::debug!(
        "spawned {} particles ({} motivation, {} rhythm, {} friction)",
        particles.count,
        particles.count_layer(Layer::Motivation),
        particles.count_layer(Layer::Rhythm),
        particles.count_layer(Layer::Friction),
    );
    particles
}

fn pick_droplet_color<R: Rng + ?Sized>(palette: &MotivationPalette, rng: &mut R) -> Rgb {
    palette.particles[rng.gen_range(0..palette.particles.len())]
}

/// A layer's spawn profile with its answer-dependent terms resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPour {
    pub layer: Layer,
    pub profile: SpawnProfile,
    /// Width of the uniform horizontal velocity around zero.
    pub jitter: f32,
    pub fall_speed: Span,
}

impl LayerPour {
    pub fn motivation() -> Self {
        let profile = SpawnProfile::MOTIVATION;
        Self {
            layer: Layer::Motivation,
            profile,
            jitter: 0.8,
            fall_speed: profile.fall_speed,
        }
    }

    pub fn rhythm(flow: &RhythmFlow) -> Self {
        let profile = SpawnProfile::RHYTHM;
        Self {
            layer: Layer::Rhythm,
            profile,
            jitter: flow.spread * 1.2,
            fall_speed: Span::new(profile.fall_speed.min, flow.drop_speed),
        }
    }

    pub fn friction(tension: &FrictionTension) -> Self {
        let profile = SpawnProfile::FRICTION;
        Self {
            layer: Layer::Friction,
            profile,
            jitter: tension.ripple * 0.7,
            fall_speed: profile.fall_speed,
        }
    }

    /// One droplet above the vessel, `stagger` higher than the pour band.
    pub fn droplet<R: Rng + ?Sized>(
        &self,
        paint: Paint,
        stagger: f32,
        config: &FusionConfig,
        rng: &mut R,
    ) -> ParticleSeed {
        let x = rng.gen::<f32>() * config.width;
        let y = -rng.gen::<f32>() * self.profile.pour_height - stagger;
        let vx = (rng.gen::<f32>() - 0.5) * self.jitter;
        let vy = self.fall_speed.sample(rng);
        ParticleSeed {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius: self.profile.radius.sample(rng),
            paint,
            alpha: self.profile.alpha.sample(rng),
            layer: self.layer,
        }
    }
}
