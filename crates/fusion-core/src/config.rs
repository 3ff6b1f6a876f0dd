/// Tunables for the vessel, the per-frame physics and the renderer.
///
/// Units are logical canvas pixels and "per frame" velocities; only `dt`,
/// `min_run_seconds` and the time-based wave terms use seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct FusionConfig {
    pub width: f32,
    pub height: f32,
    /// Nominal frame duration added to the run clock each step.
    pub dt: f32,
    pub gravity: f32,
    /// Velocity multipliers applied while a particle is in the liquid.
    pub liquid_damping_x: f32,
    pub liquid_damping_y: f32,
    /// Horizontal velocity kept (and reversed) when hitting a side wall.
    pub wall_restitution: f32,
    /// Vertical velocity kept (and reversed) when hitting the floor.
    pub floor_restitution: f32,
    pub floor_friction: f32,
    /// Rebound speed below which a particle comes to rest on the floor.
    pub rest_speed: f32,
    /// Particles below `settle_line * height` count toward the fill target.
    pub settle_line: f32,
    pub max_fill: f32,
    /// Fraction of the remaining distance to the target covered per frame.
    pub fill_rate: f32,
    pub min_run_seconds: f32,
    /// Distance above the floor still considered "at the floor".
    pub settle_band: f32,
    pub settle_speed: f32,
    /// Hard stop for runs that never settle.
    pub max_frames: u32,
    pub turbulence_probability: f32,
    /// Fill levels at or below this are not drawn.
    pub min_visible_fill: f32,
    pub glow_scale: f32,
    pub glow_blur: f32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 485.0,
            dt: 0.016,
            gravity: 0.08,
            liquid_damping_x: 0.95,
            liquid_damping_y: 0.92,
            wall_restitution: 0.6,
            floor_restitution: 0.15,
            floor_friction: 0.9,
            rest_speed: 0.5,
            settle_line: 0.7,
            max_fill: 0.85,
            fill_rate: 0.02,
            min_run_seconds: 5.0,
            settle_band: 10.0,
            settle_speed: 0.2,
            max_frames: 1800,
            turbulence_probability: 0.03,
            min_visible_fill: 0.01,
            glow_scale: 1.5,
            glow_blur: 2.0,
        }
    }
}

impl FusionConfig {
    /// Height of the liquid surface for a fill fraction; fill grows from the floor up.
    pub fn surface_height(&self, fill_level: f32) -> f32 {
        self.height * (1.0 - fill_level)
    }

    /// Lowest y a particle of `radius` may occupy.
    pub fn floor_for(&self, radius: f32) -> f32 {
        self.height - radius * 0.5
    }
}
