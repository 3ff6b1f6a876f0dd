use std::f64::consts::TAU;

use fusion_core::error::{FusionError, Result};
use fusion_core::render::gradient::GradientStop;
use fusion_core::render::Surface;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

/// `Surface` backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    /// Size `canvas` to `width` x `height` and take its 2D context.
    pub fn attach(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FusionError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| FusionError::SurfaceUnavailable("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FusionError::SurfaceUnavailable("not a 2d context".into()))?;

        Ok(Self { ctx, width, height })
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[GradientStop]) {
    for stop in stops {
        let css = stop.color.css(stop.opacity);
        if gradient.add_color_stop(stop.offset, &css).is_err() {
            log::warn!("rejected gradient stop {} at {}", css, stop.offset);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_vertical_gradient(
        &mut self,
        top_left: Vec2,
        extent: Vec2,
        from_y: f32,
        to_y: f32,
        stops: &[GradientStop],
    ) {
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, from_y as f64, 0.0, to_y as f64);
        add_stops(&gradient, stops);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(
            top_left.x as f64,
            top_left.y as f64,
            extent.x as f64,
            extent.y as f64,
        );
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        alpha: f32,
        blur: f32,
    ) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(gradient) => gradient,
            Err(e) => {
                log::warn!("radial gradient rejected: {:?}", e);
                return;
            }
        };
        add_stops(&gradient, stops);

        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_filter(&format!("blur({}px)", blur));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        if self.ctx.arc(x, y, r, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
        self.ctx.restore();
    }
}
