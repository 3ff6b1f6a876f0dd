use crate::answers::{Friction, Motivation, Rhythm};
use crate::color::Rgb;

/// Liquid colors for a motivation: the body color and the droplet colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotivationPalette {
    pub base: Rgb,
    pub particles: [Rgb; 3],
}

/// How a rhythm makes the liquid move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RhythmFlow {
    /// Horizontal swirl amplitude inside the liquid.
    pub swirl: f32,
    /// Initial horizontal spread of rhythm droplets.
    pub spread: f32,
    /// Fall-speed range multiplier for rhythm droplets.
    pub drop_speed: f32,
    /// Magnitude of the occasional random kick.
    pub turbulence: f32,
}

/// Disturbances a friction introduces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrictionTension {
    pub fracture: f32,
    pub ripple: f32,
    /// Opacity of the dark friction droplets.
    pub darkness: f32,
}

/// Everything the simulation and renderer derive from one answer set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualParams {
    pub palette: Option<MotivationPalette>,
    pub flow: Option<RhythmFlow>,
    pub tension: Option<FrictionTension>,
}

/// Droplet color used by rhythm particles when no motivation is answered.
pub const NEUTRAL_DROPLET: Rgb = Rgb::hex(0x9CA9BA);

const fn palette(base: u32, particles: [u32; 3]) -> MotivationPalette {
    MotivationPalette {
        base: Rgb::hex(base),
        particles: [
            Rgb::hex(particles[0]),
            Rgb::hex(particles[1]),
            Rgb::hex(particles[2]),
        ],
    }
}

const fn flow(swirl: f32, spread: f32, drop_speed: f32, turbulence: f32) -> RhythmFlow {
    RhythmFlow {
        swirl,
        spread,
        drop_speed,
        turbulence,
    }
}

const fn tension(fracture: f32, ripple: f32, darkness: f32) -> FrictionTension {
    FrictionTension {
        fracture,
        ripple,
        darkness,
    }
}

impl Motivation {
    pub const fn palette(self) -> MotivationPalette {
        match self {
            Motivation::Steady => palette(0x7C8B9F, [0x9CA9BA, 0xB4BEC8, 0x6B7A8E]),
            Motivation::Strong => palette(0x3D4A5C, [0x525F71, 0x687486, 0x2E3A4A]),
            Motivation::Clear => palette(0xA8D8F0, [0xC7E6F5, 0xE0F2F9, 0x89C6E8]),
            Motivation::Connected => palette(0xF4B896, [0xF8CDB0, 0xFBE2CA, 0xF0A37C]),
            Motivation::Free => palette(0x7DD8B8, [0x9EE5CA, 0xBFF2DC, 0x5CCBA6]),
            Motivation::Growing => palette(0x6FCF97, [0x8FD9AD, 0xAFE3C3, 0x4FC581]),
            Motivation::Alive => palette(0xF08E8E, [0xF5AAAA, 0xFAC6C6, 0xEB7272]),
            Motivation::Balanced => palette(0xB19CD9, [0xC5B3E6, 0xD9CAF3, 0x9D85CC]),
            Motivation::Secure => palette(0x85B3E8, [0xA1C7F0, 0xBDDCF8, 0x699FE0]),
            Motivation::Light => palette(0xF5DA9A, [0xF9E6B4, 0xFDF2CE, 0xF1CE80]),
        }
    }
}

impl Rhythm {
    pub const fn flow(self) -> RhythmFlow {
        match self {
            Rhythm::Discipline => flow(0.1, 0.3, 1.2, 0.05),
            Rhythm::Consistency => flow(0.05, 0.25, 1.0, 0.03),
            Rhythm::Momentum => flow(0.25, 0.5, 1.8, 0.15),
            Rhythm::Intention => flow(0.15, 0.35, 1.3, 0.08),
            Rhythm::Curiosity => flow(0.3, 0.6, 1.5, 0.2),
            Rhythm::Adaptability => flow(0.2, 0.55, 1.4, 0.18),
            Rhythm::Persistence => flow(0.08, 0.28, 0.9, 0.04),
            Rhythm::Structure => flow(0.05, 0.22, 1.0, 0.02),
            Rhythm::Intuition => flow(0.35, 0.65, 1.6, 0.25),
            Rhythm::Collaboration => flow(0.18, 0.45, 1.2, 0.12),
        }
    }
}

impl Friction {
    pub const fn tension(self) -> FrictionTension {
        match self {
            Friction::Overload => tension(0.8, 0.9, 0.3),
            Friction::Distraction => tension(0.6, 0.7, 0.2),
            Friction::Doubt => tension(0.5, 0.6, 0.25),
            Friction::Tension => tension(0.9, 0.8, 0.35),
            Friction::Delay => tension(0.3, 0.4, 0.15),
            Friction::Fog => tension(0.2, 0.3, 0.4),
            Friction::Disorder => tension(0.7, 0.85, 0.28),
            Friction::Depletion => tension(0.4, 0.5, 0.3),
            Friction::Resistance => tension(0.65, 0.7, 0.32),
            Friction::Weight => tension(0.35, 0.45, 0.38),
        }
    }
}
