use crate::color::Rgb;
use crate::math::{mix_f32, unit_position};

/// A color stop at `offset` in [0,1] along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
    pub opacity: f32,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgb, opacity: f32) -> Self {
        Self {
            offset,
            color,
            opacity,
        }
    }
}

/// Linear color and opacity at `t`, with stops sorted by offset.
///
/// Values before the first stop or after the last stop take that stop's
/// color, like a canvas gradient.
pub fn sample(stops: &[GradientStop], t: f32) -> ([f32; 3], f32) {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return ([0.0; 3], 0.0),
    };
    if t <= first.offset {
        return (first.color.to_unit(), first.opacity);
    }
    if t >= last.offset {
        return (last.color.to_unit(), last.opacity);
    }
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.offset {
            let k = unit_position(a.offset, b.offset, t);
            let ca = a.color.to_unit();
            let cb = b.color.to_unit();
            let color = [
                mix_f32(ca[0], cb[0], k),
                mix_f32(ca[1], cb[1], k),
                mix_f32(ca[2], cb[2], k),
            ];
            return (color, mix_f32(a.opacity, b.opacity, k));
        }
    }
    (last.color.to_unit(), last.opacity)
}
