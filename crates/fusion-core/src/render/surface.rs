use glam::Vec2;

use crate::render::gradient::GradientStop;

/// A 2D drawing target of fixed logical size.
///
/// Coordinates are in logical pixels with the origin at the top-left and y
/// growing downward. All fills composite source-over on top of what is
/// already drawn.
pub trait Surface {
    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Fill the axis-aligned rectangle `top_left`..`top_left + extent` with
    /// a vertical gradient running from `from_y` (offset 0) to `to_y`
    /// (offset 1).
    fn fill_vertical_gradient(
        &mut self,
        top_left: Vec2,
        extent: Vec2,
        from_y: f32,
        to_y: f32,
        stops: &[GradientStop],
    );

    /// Fill a disc with a radial gradient from its center (offset 0) to its
    /// rim (offset 1), composited at `alpha` and softened by `blur` pixels.
    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        alpha: f32,
        blur: f32,
    );
}
