//! Generalized parametric intersections.
//!
//! Purpose
//! - `intersect_lines`: one Cramer solve (via 2D cross products) serves all
//!   nine line/ray/segment pairings through `Domain` substitution.
//! - `intersect_circle_line` / `intersect_circles`: perpendicular-offset and
//!   half-chord decomposition with tangency collapse.
//!
//! Parameter acceptance always sees `eps / |vector|`, keeping the tolerance
//! a spatial distance regardless of the direction vector's magnitude.

use nalgebra::Vector2;

use super::domain::Domain;
use super::types::{Circle, GeomCfg, Line};
use super::util::{cross, normalize_eps, rotate90};

/// Intersection point of two line-like primitives.
///
/// Returns None when either direction is degenerate, the directions are
/// parallel (normalized cross within eps), or a solution parameter falls
/// outside its domain. Parallel support lines are reported as no
/// intersection even when they coincide; collinear-overlap semantics are a
/// caller concern.
pub fn intersect_lines(
    a: &Line,
    dom_a: Domain,
    b: &Line,
    dom_b: Domain,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let ua = normalize_eps(a.vector, cfg.eps)?;
    let ub = normalize_eps(b.vector, cfg.eps)?;
    if cross(ua, ub).abs() < cfg.eps {
        return None;
    }
    let det = cross(a.vector, b.vector);
    let t0 = cross(b.origin - a.origin, b.vector) / det;
    let t1 = cross(a.origin - b.origin, a.vector) / -det;
    if !dom_a.accepts(t0, cfg.eps / a.vector.norm()) {
        return None;
    }
    if !dom_b.accepts(t1, cfg.eps / b.vector.norm()) {
        return None;
    }
    Some(a.point_at(t0))
}

/// Circle–line intersection: 0, 1 (tangent), or 2 points, each filtered
/// through `dom` on its own line parameter. A near-zero radius degenerates
/// to a point test against the line.
pub fn intersect_circle_line(
    c: &Circle,
    l: &Line,
    dom: Domain,
    cfg: GeomCfg,
) -> Vec<Vector2<f64>> {
    let Some(unit) = normalize_eps(l.vector, cfg.eps) else {
        return Vec::new();
    };
    // Signed offset of the center from the support line.
    let det = cross(l.origin - c.origin, unit);
    if det.abs() > c.radius + cfg.eps {
        return Vec::new();
    }
    let half = (c.radius * c.radius - det * det).max(0.0).sqrt();
    let foot = c.origin - rotate90(unit) * det;
    let candidates = if (c.radius - det.abs()).abs() < cfg.eps {
        vec![foot + unit * half]
    } else {
        vec![foot - unit * half, foot + unit * half]
    };
    let mag = l.vector.norm();
    candidates
        .into_iter()
        .filter(|p| {
            let t = (p - l.origin).dot(&l.vector) / (mag * mag);
            dom.accepts(t, cfg.eps / mag)
        })
        .collect()
}

/// Circle–circle intersection: 0, 1 (tangent), or 2 points. Concentric,
/// separated, and nested circles yield no points.
pub fn intersect_circles(c1: &Circle, c2: &Circle, cfg: GeomCfg) -> Vec<Vector2<f64>> {
    let (small, big) = if c1.radius < c2.radius {
        (c1, c2)
    } else {
        (c2, c1)
    };
    let sep = small.origin - big.origin;
    let d = sep.norm();
    if d < cfg.eps {
        return Vec::new();
    }
    // Point on the big circle along the center line.
    let base = big.origin + sep * (big.radius / d);
    let (r, rr) = (small.radius, big.radius);
    if ((rr + r) - d).abs() < cfg.eps || (rr - (r + d)).abs() < cfg.eps {
        return vec![base];
    }
    if d + r < rr || rr + r < d {
        return Vec::new();
    }
    let angle = ((r * r - d * d - rr * rr) / (-2.0 * d * rr))
        .clamp(-1.0, 1.0)
        .acos();
    let swing = |a: f64| {
        let v = base - big.origin;
        big.origin + Vector2::new(v.x * a.cos() - v.y * a.sin(), v.x * a.sin() + v.y * a.cos())
    };
    vec![swing(angle), swing(-angle)]
}

/// Closest point of the `dom`-restricted primitive to `p` (orthogonal
/// projection with the parameter clamped into the domain). A degenerate
/// direction collapses to the line origin.
pub fn nearest_point(p: Vector2<f64>, l: &Line, dom: Domain, cfg: GeomCfg) -> Vector2<f64> {
    let mag_sq = l.vector.norm_squared();
    if mag_sq < cfg.eps * cfg.eps {
        return l.origin;
    }
    let t = (p - l.origin).dot(&l.vector) / mag_sq;
    l.point_at(dom.clamp(t))
}

/// Membership of `p` on the `dom`-restricted primitive: spatial distance to
/// the support line within eps, then domain acceptance of the projection
/// parameter.
pub fn point_on_line(p: Vector2<f64>, l: &Line, dom: Domain, cfg: GeomCfg) -> bool {
    let Some(unit) = normalize_eps(l.vector, cfg.eps) else {
        return (p - l.origin).norm() < cfg.eps;
    };
    if cross(unit, p - l.origin).abs() > cfg.eps {
        return false;
    }
    let mag = l.vector.norm();
    let t = (p - l.origin).dot(&l.vector) / (mag * mag);
    dom.accepts(t, cfg.eps / mag)
}
