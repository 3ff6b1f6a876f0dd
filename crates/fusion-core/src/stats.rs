/// Counters from a single simulation step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    /// Frame number this step produced (1-based).
    pub frame: u32,
    pub particle_count: u32,
    /// Particles that touched a side wall this step.
    pub wall_hits: u32,
    /// Particles that touched the floor this step.
    pub floor_hits: u32,
    /// Floor contacts that came to rest.
    pub resting: u32,
    /// Fill fraction the liquid is heading toward.
    pub fill_target: f32,
    /// Smoothed fill fraction after this step.
    pub fill_level: f32,
}

/// Exponential moving average of frame cost, fed by the host's clock.
///
/// The engine has no clock of its own; hosts time `on_frame` and report here.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameTimer {
    ema_ms: f32,
    last_ms: f32,
    samples: u32,
}

impl FrameTimer {
    pub fn record(&mut self, frame_ms: f32) {
        self.last_ms = frame_ms;
        // EMA with alpha=0.3 for responsiveness
        self.ema_ms = if self.samples == 0 {
            frame_ms
        } else {
            self.ema_ms * 0.7 + frame_ms * 0.3
        };
        self.samples = self.samples.saturating_add(1);
    }

    pub fn last_ms(&self) -> f32 {
        self.last_ms
    }

    pub fn average_ms(&self) -> f32 {
        self.ema_ms
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_seeds_average() {
        let mut t = FrameTimer::default();
        t.record(4.0);
        assert_eq!(t.average_ms(), 4.0);
        assert_eq!(t.last_ms(), 4.0);
    }

    #[test]
    fn test_average_converges() {
        let mut t = FrameTimer::default();
        t.record(20.0);
        for _ in 0..50 {
            t.record(2.0);
        }
        assert!((t.average_ms() - 2.0).abs() < 0.01);
        assert_eq!(t.samples(), 51);
    }
}
