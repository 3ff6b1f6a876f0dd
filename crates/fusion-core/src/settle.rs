//! Termination predicates for a run.

use crate::config::FusionConfig;
use crate::solver::SimulationState;

/// True when every particle sits near the floor and has (almost) stopped
/// moving vertically. Vacuously true for an empty vessel.
pub fn is_settled(state: &SimulationState, config: &FusionConfig) -> bool {
    let particles = &state.particles;
    (0..particles.count).all(|i| {
        let near_floor =
            particles.position[i].y >= config.height - particles.radius[i] - config.settle_band;
        near_floor && particles.velocity[i].y.abs() < config.settle_speed
    })
}

/// Whether another frame should be scheduled.
///
/// Runs last at least `min_run_seconds`, then until settled, and never past
/// `max_frames`.
pub fn should_continue(state: &SimulationState, config: &FusionConfig) -> bool {
    if state.frame >= config.max_frames {
        return false;
    }
    state.time < config.min_run_seconds || !is_settled(state, config)
}
