//! Small vector helpers shared across the kernel.

use nalgebra::Vector2;

/// 2D cross product (signed area of the parallelogram spanned by `a`, `b`).
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Counterclockwise quarter turn.
#[inline]
pub fn rotate90(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Clockwise quarter turn.
#[inline]
pub fn rotate270(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(v.y, -v.x)
}

#[inline]
pub fn midpoint(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    (a + b) * 0.5
}

/// Unit vector, or None when `|v|` is within eps of zero (or not finite).
#[inline]
pub(crate) fn normalize_eps(v: Vector2<f64>, eps: f64) -> Option<Vector2<f64>> {
    let norm = v.norm();
    if !norm.is_finite() || norm < eps {
        return None;
    }
    Some(v / norm)
}
