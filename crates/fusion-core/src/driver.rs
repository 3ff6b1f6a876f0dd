//! Frame-loop lifecycle: one run at a time, restarted on new answers,
//! cancelled on teardown.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::answers::AnswerSet;
use crate::config::FusionConfig;
use crate::error::Result;
use crate::render::{render_frame, Surface};
use crate::solver::Simulation;
use crate::stats::StepStats;

/// Host hook for "call me on the next display refresh".
///
/// Each requested frame must end in exactly one call to
/// [`AnimationDriver::on_frame`] unless it is cancelled first.
pub trait FrameScheduler {
    type Handle: Copy;

    fn request_frame(&mut self) -> Result<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// What a frame callback did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// No run is active; nothing was stepped or drawn.
    Idle,
    /// Stepped and drawn; another frame is scheduled.
    Continue(StepStats),
    /// Stepped and drawn; the run has settled (or hit its frame cap) and the
    /// driver is now idle.
    Finished(StepStats),
}

/// Owns the simulation run and its pending frame.
pub struct AnimationDriver<S: FrameScheduler> {
    config: FusionConfig,
    scheduler: S,
    seeds: StdRng,
    simulation: Option<Simulation>,
    pending: Option<S::Handle>,
    last_stats: Option<StepStats>,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    /// Driver whose runs are seeded from OS entropy.
    pub fn new(scheduler: S, config: FusionConfig) -> Self {
        Self::with_seeds(scheduler, config, StdRng::from_entropy())
    }

    /// Driver whose runs are reproducible from `seed`.
    pub fn with_seed(scheduler: S, config: FusionConfig, seed: u64) -> Self {
        Self::with_seeds(scheduler, config, StdRng::seed_from_u64(seed))
    }

    fn with_seeds(scheduler: S, config: FusionConfig, seeds: StdRng) -> Self {
        Self {
            config,
            scheduler,
            seeds,
            simulation: None,
            pending: None,
            last_stats: None,
        }
    }

    /// Throw away any current run and start pouring `answers` from scratch.
    pub fn restart(&mut self, answers: AnswerSet) {
        self.cancel_pending();
        let seed = self.seeds.gen();
        self.simulation = Some(Simulation::new(answers, self.config.clone(), seed));
        self.last_stats = None;
        self.schedule_next();
    }

    /// Frame callback: step, draw, then schedule the next frame or go idle.
    pub fn on_frame<T: Surface + ?Sized>(&mut self, surface: &mut T) -> FrameOutcome {
        // The frame that invoked us is no longer pending.
        self.pending = None;

        let Some(simulation) = self.simulation.as_mut() else {
            return FrameOutcome::Idle;
        };
        let stats = simulation.step();
        render_frame(surface, simulation.state(), simulation.params(), &simulation.config);
        self.last_stats = Some(stats);

        if simulation.should_continue() {
            self.schedule_next();
            if self.pending.is_some() {
                return FrameOutcome::Continue(stats);
            }
        } else if simulation.is_settled() {
            log::info!(
                "pour settled after {} frames, fill {:.3}",
                stats.frame,
                stats.fill_level
            );
        } else {
            log::warn!(
                "pour stopped at frame cap {} without settling, fill {:.3}",
                stats.frame,
                stats.fill_level
            );
        }
        FrameOutcome::Finished(stats)
    }

    /// Cancel the pending frame and drop the run.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        if self.simulation.take().is_some() {
            log::debug!("pour torn down");
        }
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.simulation.as_ref()
    }

    pub fn last_stats(&self) -> Option<StepStats> {
        self.last_stats
    }

    fn schedule_next(&mut self) {
        match self.scheduler.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(err) => {
                log::warn!("pour aborted: {}", err);
                self.pending = None;
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for AnimationDriver<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
