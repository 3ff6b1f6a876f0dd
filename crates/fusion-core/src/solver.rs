use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::answers::AnswerSet;
use crate::config::FusionConfig;
use crate::constraints::floor::{settle_on_floor, FloorContact};
use crate::constraints::walls::reflect_walls;
use crate::fill::{fill_target, smooth_toward};
use crate::forces::medium::apply_medium;
use crate::forces::swirl::{compute_swirl, turbulence_impulse};
use crate::forces::tension::compute_tension;
use crate::particle::{Layer, ParticleSet};
use crate::settle;
use crate::spawn::initialize;
use crate::stats::StepStats;
use crate::tables::VisualParams;

/// Everything that changes frame to frame within one run.
#[derive(Clone, Debug, Default)]
pub struct SimulationState {
    /// Seconds of simulated time since the run started.
    pub time: f32,
    /// Frames stepped since the run started.
    pub frame: u32,
    /// Smoothed fraction of the vessel drawn as liquid, `[0, max_fill]`.
    pub fill_level: f32,
    pub particles: ParticleSet,
}

impl SimulationState {
    pub fn new(particles: ParticleSet) -> Self {
        Self {
            time: 0.0,
            frame: 0,
            fill_level: 0.0,
            particles,
        }
    }
}

/// Advance `state` by one frame.
///
/// Forces act on velocities first, then positions are integrated with one
/// explicit Euler step, then the vessel walls and floor are enforced. The
/// fill level is updated last from the new positions and is therefore seen
/// by the next frame's surface test.
pub fn step<R: Rng + ?Sized>(
    state: &mut SimulationState,
    params: &VisualParams,
    config: &FusionConfig,
    rng: &mut R,
) -> StepStats {
    state.time += config.dt;
    state.frame += 1;

    let time = state.time;
    let surface = config.surface_height(state.fill_level);
    let particles = &mut state.particles;
    let mut stats = StepStats::default();

    for i in 0..particles.count {
        let mut pos = particles.position[i];
        let mut vel = apply_medium(pos, particles.velocity[i], surface, config);
        let submerged = pos.y > surface;

        if let Some(flow) = &params.flow {
            if submerged {
                vel.x += compute_swirl(pos, time, flow);
                vel += turbulence_impulse(flow, config.turbulence_probability, rng);
            }
        }

        if let Some(tension) = &params.tension {
            if particles.layer[i] == Layer::Friction {
                vel += compute_tension(pos, time, tension, submerged);
            }
        }

        pos += vel;

        if reflect_walls(&mut pos, &mut vel, config.width, config.wall_restitution) {
            stats.wall_hits += 1;
        }
        match settle_on_floor(&mut pos, &mut vel, particles.radius[i], config) {
            FloorContact::Clear => {}
            FloorContact::Bounced => stats.floor_hits += 1,
            FloorContact::Resting => {
                stats.floor_hits += 1;
                stats.resting += 1;
            }
        }

        particles.position[i] = pos;
        particles.velocity[i] = vel;
    }

    let target = fill_target(particles, config);
    state.fill_level = smooth_toward(state.fill_level, target, config.fill_rate);

    stats.frame = state.frame;
    stats.particle_count = particles.count as u32;
    stats.fill_target = target;
    stats.fill_level = state.fill_level;
    stats
}

/// One run of the pour: the answers it was built from, their resolved
/// parameters, the evolving state and the random source driving it.
pub struct Simulation {
    pub config: FusionConfig,
    answers: AnswerSet,
    params: VisualParams,
    state: SimulationState,
    rng: StdRng,
}

impl Simulation {
    /// Start a fresh run. All state comes from `answers` and `seed`; nothing
    /// carries over from any earlier run.
    pub fn new(answers: AnswerSet, config: FusionConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = initialize(&answers, &config, &mut rng);
        log::info!(
            "new pour: {} particles for {:?} (seed {})",
            particles.count,
            answers,
            seed
        );
        Self {
            params: answers.visual_params(),
            answers,
            state: SimulationState::new(particles),
            rng,
            config,
        }
    }

    pub fn step(&mut self) -> StepStats {
        step(&mut self.state, &self.params, &self.config, &mut self.rng)
    }

    pub fn should_continue(&self) -> bool {
        settle::should_continue(&self.state, &self.config)
    }

    pub fn is_settled(&self) -> bool {
        settle::is_settled(&self.state, &self.config)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn params(&self) -> &VisualParams {
        &self.params
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.state.particles
    }

    pub fn fill_level(&self) -> f32 {
        self.state.fill_level
    }
}
