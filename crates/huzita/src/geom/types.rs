//! Basic 2D value types and tolerances.
//!
//! - `GeomCfg`: centralizes the kernel epsilon and the axiom-6 guard
//!   tolerance.
//! - `Line`: parametric `origin + vector·t`; the line/ray/segment kind is a
//!   property of the call (a `Domain`), never of the value.
//! - `UniqueLine`: unit-normal + signed-distance form of the same infinite
//!   line, with no direction ambiguity.
//! - `Circle`: radius + center.

use nalgebra::Vector2;

use super::util::{rotate270, rotate90};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Spatial tolerance for equality, parallelism, and boundary membership.
    pub eps: f64,
    /// Axiom-6 guard: how close (as a distance) a point may sit to its
    /// target line before the fold family degenerates and the operation
    /// reports no solutions.
    pub eps_on_line: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            eps_on_line: 2e-2,
        }
    }
}

/// Parametric line `origin + vector·t`.
///
/// `vector` is expected non-degenerate; the kernel rejects near-zero
/// directions with "no intersection" instead of dividing by them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub vector: Vector2<f64>,
    pub origin: Vector2<f64>,
}

impl Line {
    #[inline]
    pub fn new(vector: Vector2<f64>, origin: Vector2<f64>) -> Self {
        Self { vector, origin }
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        self.origin + self.vector * t
    }

    /// Unit-normal/signed-distance form: normal is `rotate90(vector)`
    /// normalized by `|vector|`, distance is the origin's projection onto
    /// that normal.
    #[inline]
    pub fn to_unique(&self) -> UniqueLine {
        let normal = rotate90(self.vector) / self.vector.norm();
        UniqueLine {
            normal,
            distance: self.origin.dot(&normal),
        }
    }

    /// Reflect `p` across this line.
    #[inline]
    pub fn reflect(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.to_unique().reflect(p)
    }
}

/// Direction-free line `{ x : normal·x = distance }` with `|normal| = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniqueLine {
    pub normal: Vector2<f64>,
    pub distance: f64,
}

impl UniqueLine {
    /// Back to parametric form. The sampled origin is the foot of the
    /// normal, not necessarily the origin the line was built from.
    #[inline]
    pub fn to_line(&self) -> Line {
        Line {
            vector: rotate270(self.normal),
            origin: self.normal * self.distance,
        }
    }

    /// Same infinite line: equal normals, or sign-flipped normals with
    /// negated distance, within eps.
    pub fn is_equivalent(&self, other: &UniqueLine, eps: f64) -> bool {
        ((self.normal - other.normal).norm() < eps
            && (self.distance - other.distance).abs() < eps)
            || ((self.normal + other.normal).norm() < eps
                && (self.distance + other.distance).abs() < eps)
    }

    /// Reflect `p` across this line.
    #[inline]
    pub fn reflect(&self, p: Vector2<f64>) -> Vector2<f64> {
        p - self.normal * (2.0 * (self.normal.dot(&p) - self.distance))
    }
}

/// Circle by radius and center. `radius ≈ 0` degenerates to a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub origin: Vector2<f64>,
}

impl Circle {
    #[inline]
    pub fn new(radius: f64, origin: Vector2<f64>) -> Self {
        Self { radius, origin }
    }
}
