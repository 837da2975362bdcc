//! Angle bisectors of two lines.

use super::domain::Domain;
use super::intersect::intersect_lines;
use super::types::{GeomCfg, Line};
use super::util::{cross, midpoint, normalize_eps, rotate90};

/// The one (parallel inputs) or two lines bisecting the angles between `a`
/// and `b`.
///
/// Parallel inputs admit only the midline: direction of `a`, through the
/// midpoint of the two origins. Non-parallel inputs share the computed
/// intersection as origin, the summed-direction bisector first and its
/// perpendicular second. Degenerate directions yield no bisectors.
pub fn bisect_lines(a: &Line, b: &Line, cfg: GeomCfg) -> Vec<Line> {
    let (Some(ua), Some(ub)) = (
        normalize_eps(a.vector, cfg.eps),
        normalize_eps(b.vector, cfg.eps),
    ) else {
        return Vec::new();
    };
    if cross(ua, ub).abs() < cfg.eps {
        return vec![Line::new(a.vector, midpoint(a.origin, b.origin))];
    }
    let origin = match intersect_lines(a, Domain::Line, b, Domain::Line, cfg) {
        Some(p) => p,
        None => return Vec::new(),
    };
    // The sum formula cancels catastrophically when the directions nearly
    // oppose each other; a quarter turn of either input is the bisector then.
    let first = if ua.dot(&ub) < -1.0 + cfg.eps {
        rotate90(ua)
    } else {
        (ua + ub).normalize()
    };
    vec![Line::new(first, origin), Line::new(rotate90(first), origin)]
}
