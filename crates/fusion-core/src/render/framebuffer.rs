use glam::Vec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::math::smoothstep;
use crate::render::gradient::{sample, GradientStop};
use crate::render::surface::Surface;

/// One straight-alpha RGBA8 pixel; 4 bytes, matches canvas `ImageData`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Composite `color` at `alpha` over this pixel (source-over).
    #[inline]
    fn blend(&mut self, color: [f32; 3], alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let alpha = alpha.min(1.0);
        let dst_a = self.a as f32 / 255.0;
        let out_a = alpha + dst_a * (1.0 - alpha);
        if out_a <= 0.0 {
            return;
        }
        let keep = dst_a * (1.0 - alpha);
        let mix = |src: f32, dst: u8| -> u8 {
            let v = (src * alpha + dst as f32 / 255.0 * keep) / out_a;
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        self.r = mix(color[0], self.r);
        self.g = mix(color[1], self.g);
        self.b = mix(color[2], self.b);
        self.a = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Software drawing target. Row-major, top row first.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Raw RGBA bytes, ready for an `ImageData` upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels with any coverage.
    pub fn covered_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p.a > 0).count()
    }

    /// Clip `[lo, hi)` in pixel coordinates to `[0, limit)`.
    fn clip_span(lo: f32, hi: f32, limit: u32) -> Option<(usize, usize)> {
        let start = lo.floor().max(0.0) as usize;
        let end = (hi.ceil().max(0.0) as usize).min(limit as usize);
        (start < end).then_some((start, end))
    }

    /// Run `shade(y, row)` over rows `y0..y1`.
    fn shade_rows<F>(&mut self, y0: usize, y1: usize, shade: F)
    where
        F: Fn(usize, &mut [Rgba8]) + Send + Sync,
    {
        let width = self.width as usize;
        let rows = &mut self.pixels[y0 * width..y1 * width];

        #[cfg(feature = "parallel")]
        rows.par_chunks_mut(width)
            .enumerate()
            .for_each(|(i, row)| shade(y0 + i, row));

        #[cfg(not(feature = "parallel"))]
        rows.chunks_mut(width)
            .enumerate()
            .for_each(|(i, row)| shade(y0 + i, row));
    }
}

impl Surface for Framebuffer {
    fn clear(&mut self) {
        self.pixels.fill(Rgba8::TRANSPARENT);
    }

    fn fill_vertical_gradient(
        &mut self,
        top_left: Vec2,
        extent: Vec2,
        from_y: f32,
        to_y: f32,
        stops: &[GradientStop],
    ) {
        let Some((x0, x1)) = Self::clip_span(top_left.x, top_left.x + extent.x, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::clip_span(top_left.y, top_left.y + extent.y, self.height) else {
            return;
        };
        let span = to_y - from_y;

        self.shade_rows(y0, y1, |y, row| {
            let cy = y as f32 + 0.5;
            let t = if span.abs() < f32::EPSILON {
                0.0
            } else {
                (cy - from_y) / span
            };
            let (color, opacity) = sample(stops, t);
            for px in &mut row[x0..x1] {
                px.blend(color, opacity);
            }
        });
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        alpha: f32,
        blur: f32,
    ) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }
        let blur = blur.max(0.0);
        let reach = radius + blur;
        let Some((x0, x1)) = Self::clip_span(center.x - reach, center.x + reach, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::clip_span(center.y - reach, center.y + reach, self.height) else {
            return;
        };

        self.shade_rows(y0, y1, |y, row| {
            let cy = y as f32 + 0.5;
            for (x, px) in row.iter_mut().enumerate().take(x1).skip(x0) {
                let d = Vec2::new(x as f32 + 0.5, cy).distance(center);
                if d > reach {
                    continue;
                }
                let edge = if blur > 0.0 {
                    1.0 - smoothstep(radius - blur, reach, d)
                } else if d <= radius {
                    1.0
                } else {
                    0.0
                };
                let (color, opacity) = sample(stops, d / radius);
                px.blend(color, opacity * alpha * edge);
            }
        });
    }
}
