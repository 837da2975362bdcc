//! Boundary-membership predicates for line-like parameters.
//!
//! One intersection routine serves all nine line/ray/segment pairings by
//! substituting these per-line predicates. Inclusive variants admit
//! parameters within eps outside the boundary; exclusive variants demand
//! eps inside.

/// Which portion of a parametric line a parameter `t` may fall in.
///
/// The infinite line accepts everything, so its inclusive and exclusive
/// forms collapse into a single variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    /// Infinite line: every `t` accepted.
    Line,
    /// Ray `t >= 0`, endpoint included (`t > -eps`).
    RayIncl,
    /// Ray `t > 0`, endpoint excluded (`t > eps`).
    RayExcl,
    /// Segment `0 <= t <= 1`, endpoints included.
    SegmentIncl,
    /// Segment `0 < t < 1`, endpoints excluded.
    SegmentExcl,
}

impl Domain {
    /// Membership of parameter `t` under tolerance `eps`. Callers rescale
    /// `eps` by `1/|vector|` so the tolerance stays a spatial distance.
    #[inline]
    pub fn accepts(self, t: f64, eps: f64) -> bool {
        match self {
            Domain::Line => true,
            Domain::RayIncl => t > -eps,
            Domain::RayExcl => t > eps,
            Domain::SegmentIncl => t > -eps && t < 1.0 + eps,
            Domain::SegmentExcl => t > eps && t < 1.0 - eps,
        }
    }

    /// Clamp a projection parameter into the domain (nearest-point use).
    #[inline]
    pub fn clamp(self, t: f64) -> f64 {
        match self {
            Domain::Line => t,
            Domain::RayIncl | Domain::RayExcl => t.max(0.0),
            Domain::SegmentIncl | Domain::SegmentExcl => t.clamp(0.0, 1.0),
        }
    }
}
