use glam::Vec2;

use crate::answers::Dimension;
use crate::color::Paint;

/// Layer tags which answer dimension spawned a particle and gates the
/// effects that act on it.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Layer {
    Motivation = 0,
    Rhythm = 1,
    Friction = 2,
}

impl From<Dimension> for Layer {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Motivation => Layer::Motivation,
            Dimension::Rhythm => Layer::Rhythm,
            Dimension::Friction => Layer::Friction,
        }
    }
}

/// SoA particle storage
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    pub count: usize,
    pub position: Vec<Vec2>,
    pub velocity: Vec<Vec2>,
    pub radius: Vec<f32>,
    /// Fill color and its own opacity.
    pub paint: Vec<Paint>,
    /// Compositing alpha applied to the whole droplet.
    pub alpha: Vec<f32>,
    pub layer: Vec<Layer>,
}

/// Initial values for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSeed {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub alpha: f32,
    pub layer: Layer,
}

impl ParticleSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count: 0,
            position: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            radius: Vec::with_capacity(capacity),
            paint: Vec::with_capacity(capacity),
            alpha: Vec::with_capacity(capacity),
            layer: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, seed: ParticleSeed) {
        self.position.push(seed.position);
        self.velocity.push(seed.velocity);
        self.radius.push(seed.radius);
        self.paint.push(seed.paint);
        self.alpha.push(seed.alpha);
        self.layer.push(seed.layer);
        self.count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of particles carrying `layer`.
    pub fn count_layer(&self, layer: Layer) -> usize {
        self.layer.iter().filter(|&&l| l == layer).count()
    }
}
