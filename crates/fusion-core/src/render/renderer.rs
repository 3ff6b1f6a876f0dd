use glam::Vec2;

use crate::color::hex_alpha;
use crate::config::FusionConfig;
use crate::render::gradient::GradientStop;
use crate::render::surface::Surface;
use crate::solver::SimulationState;
use crate::tables::{MotivationPalette, VisualParams};

/// Height of the shimmer band and how far it reaches above the surface.
const SHIMMER_HEIGHT: f32 = 40.0;
const SHIMMER_LIFT: f32 = 30.0;

/// Opacity profile of a droplet from center to rim, before the paint's own opacity.
const GLOW_FALLOFF: [(f32, f32); 4] = [(0.0, 1.0), (0.4, 0.67), (0.7, 0.33), (1.0, 0.0)];

/// Draw one frame of `state` onto `surface`.
///
/// Clears, then paints the liquid body and its surface shimmer (only when a
/// motivation is answered and the fill is visible), then every droplet as a
/// soft radial glow. Reads the state, never mutates it.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    state: &SimulationState,
    params: &VisualParams,
    config: &FusionConfig,
) {
    surface.clear();

    if let Some(palette) = &params.palette {
        if state.fill_level > config.min_visible_fill {
            draw_liquid(surface, palette, state.fill_level, config);
        }
    }

    let particles = &state.particles;
    for i in 0..particles.count {
        let paint = particles.paint[i];
        let stops = GLOW_FALLOFF
            .map(|(offset, opacity)| GradientStop::new(offset, paint.rgb, opacity * paint.opacity));
        surface.fill_radial_gradient(
            particles.position[i],
            particles.radius[i] * config.glow_scale,
            &stops,
            particles.alpha[i],
            config.glow_blur,
        );
    }
}

fn draw_liquid<S: Surface + ?Sized>(
    surface: &mut S,
    palette: &MotivationPalette,
    fill_level: f32,
    config: &FusionConfig,
) {
    let base = palette.base;
    let fill_height = config.height * fill_level;
    let surface_y = config.height - fill_height;

    let body = [
        GradientStop::new(0.0, base, hex_alpha(0x20)),
        GradientStop::new(0.5, base, hex_alpha(0x40)),
        GradientStop::new(1.0, base, hex_alpha(0x60)),
    ];
    surface.fill_vertical_gradient(
        Vec2::new(0.0, surface_y),
        Vec2::new(config.width, fill_height),
        surface_y,
        config.height,
        &body,
    );

    let shimmer_top = surface_y - SHIMMER_LIFT;
    let shimmer = [
        GradientStop::new(0.0, base, 0.0),
        GradientStop::new(0.5, base, hex_alpha(0x50)),
        GradientStop::new(1.0, base, hex_alpha(0x20)),
    ];
    surface.fill_vertical_gradient(
        Vec2::new(0.0, shimmer_top),
        Vec2::new(config.width, SHIMMER_HEIGHT),
        shimmer_top,
        shimmer_top + SHIMMER_HEIGHT,
        &shimmer,
    );
}
