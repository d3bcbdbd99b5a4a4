//! Scalar helpers shared by the attractor, the integrator and the derived getters.

/// Linear interpolation: `a + (b - a) * t`.
///
/// `t` is not clamped. Values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Saturating clamp into `[min, max]`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Largest multiple of `step` that is `<= value`.
#[inline]
pub fn floor_to_step(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

/// Smallest multiple of `step` that is `>= value`.
#[inline]
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Multiple of `step` closest to `value` (halves round away from zero).
#[inline]
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// The point the step attractor pulls `value` toward.
///
/// This is the nearest multiple of `step` inside `[min, max]`. When rounding lands outside the
/// bounds the next grid point inward is used instead. When no multiple of `step` lies inside the
/// bounds at all, `value` itself is returned and no snapping takes place.
pub fn attractor_point(value: f64, step: f64, min: f64, max: f64) -> f64 {
    let mut point = round_to_step(value, step);
    if point > max {
        point = floor_to_step(max, step);
    }
    if point < min {
        point = ceil_to_step(min, step);
    }
    if point < min || point > max {
        return value;
    }
    point
}

/// Whether `a` and `b` are within `epsilon` of each other.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}
