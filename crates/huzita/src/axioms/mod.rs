//! The seven Huzita–Justin fold constructions.
//!
//! Purpose
//! - Each axiom is a pure function from points and lines to fold lines;
//!   result types follow the operation's true cardinality: always one
//!   (axioms 1, 2, 4), up to two (3, 5), up to three (6), or optional (7).
//! - Axioms 3, 5, 6, 7 bottom out in the `geom` kernel; axiom 6
//!   additionally walks the unit-normal line form and the cubic solver.
//!
//! Degenerate inputs (coincident points, zero direction vectors) are caller
//! errors and produce degenerate folds rather than being corrected here.

use nalgebra::Vector2;

use crate::geom::{
    bisect_lines, intersect_circle_line, intersect_lines, midpoint, rotate270, rotate90, Circle,
    Domain, GeomCfg, Line,
};
use crate::roots::solve_polynomial;


/// Axiom 1: the fold through both points.
pub fn axiom1(p1: Vector2<f64>, p2: Vector2<f64>) -> Line {
    Line::new((p2 - p1).normalize(), p1)
}

/// Axiom 2: the fold bringing `p1` onto `p2` — their perpendicular
/// bisector.
pub fn axiom2(p1: Vector2<f64>, p2: Vector2<f64>) -> Line {
    Line::new(rotate90((p2 - p1).normalize()), midpoint(p1, p2))
}

/// Axiom 3: fold(s) bringing line `a` onto line `b` — the angle
/// bisector(s). One fold for parallel inputs, two otherwise.
pub fn axiom3(a: &Line, b: &Line, cfg: GeomCfg) -> Vec<Line> {
    bisect_lines(a, b, cfg)
}

/// Axiom 4: the fold through `point` perpendicular to `vector`.
pub fn axiom4(vector: Vector2<f64>, point: Vector2<f64>) -> Line {
    Line::new(rotate90(vector.normalize()), point)
}

/// Axiom 5: folds bringing `point` onto `line` while passing through
/// `pivot`.
///
/// A fold through `pivot` keeps `point` at its distance from `pivot`, so
/// the image of `point` lies on the circle around `pivot` through `point`.
/// Each circle–line intersection is one candidate image; the fold is the
/// perpendicular bisector of `point` and that image. Zero, one (tangent),
/// or two folds.
pub fn axiom5(
    line: &Line,
    point: Vector2<f64>,
    pivot: Vector2<f64>,
    cfg: GeomCfg,
) -> Vec<Line> {
    let circle = Circle::new((point - pivot).norm(), pivot);
    intersect_circle_line(&circle, line, Domain::Line, cfg)
        .into_iter()
        .map(|image| axiom2(point, image))
        .collect()
}

/// Axiom 6: folds bringing `p1` onto `l1` and `p2` onto `l2`
/// simultaneously.
///
/// The candidate image of `p1` runs along `l1` as `h(t) = n·d + t·w` in the
/// unit-normal form of `l1` (`w` the line direction); the fold is the
/// perpendicular bisector of `p1` and `h(t)`. Requiring the same fold to
/// reflect `p2` onto `l2` makes the constraint a cubic in `t`, solved for
/// up to three real parameters. Reports no folds while `p1` sits within
/// `eps_on_line` of `l1`, where the family degenerates.
pub fn axiom6(
    l1: &Line,
    l2: &Line,
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    cfg: GeomCfg,
) -> Vec<Line> {
    let u1 = l1.to_unique();
    let u2 = l2.to_unique();
    if (u1.normal.dot(&p1) - u1.distance).abs() < cfg.eps_on_line {
        return Vec::new();
    }
    let w = rotate270(u1.normal);
    let foot = u1.normal * u1.distance;
    let back = foot - p1;
    let span = p1 + foot - p2 * 2.0;
    let c1 = u2.normal.dot(&p2) - u2.distance;
    let c2 = 2.0 * back.dot(&w);
    let c3 = back.dot(&back);
    let c4 = (back + span).dot(&w);
    let c5 = span.dot(&back);
    let c6 = w.dot(&u2.normal);
    let c7 = back.dot(&u2.normal);
    let a = c6;
    let b = c1 + c4 * c6 + c7;
    let c = c1 * c2 + c5 * c6 + c4 * c7;
    let d = c1 * c3 + c5 * c7;
    solve_polynomial(a, b, c, d, cfg.eps)
        .into_iter()
        .map(|t| foot + w * t)
        .filter(|image| (image - p1).norm() > cfg.eps)
        .map(|image| axiom2(p1, image))
        .collect()
}

/// Axiom 7: the fold perpendicular to `l1` bringing `point` onto `l2`.
///
/// A fold perpendicular to `l1` moves points along `l1`'s direction, so the
/// image of `point` is where the line through `point` parallel to `l1`
/// meets `l2`; the fold is their perpendicular bisector. None when `l1` and
/// `l2` are parallel (coincident included): the carrier line is then
/// parallel to `l2` as well.
pub fn axiom7(l1: &Line, l2: &Line, point: Vector2<f64>, cfg: GeomCfg) -> Option<Line> {
    let carrier = Line::new(l1.vector, point);
    let image = intersect_lines(&carrier, Domain::Line, l2, Domain::Line, cfg)?;
    Some(axiom2(point, image))
}
