/// GLSL-style `mix(a, b, t)` for scalars.
#[inline]
pub fn mix_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Smooth interpolation - GLSL smoothstep
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Position of `x` between `a` and `b`, clamped to [0,1]. Degenerate ranges map to 0.
pub fn unit_position(a: f32, b: f32, x: f32) -> f32 {
    let span = b - a;
    if span.abs() < f32::EPSILON {
        return 0.0;
    }
    ((x - a) / span).clamp(0.0, 1.0)
}
