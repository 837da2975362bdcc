use super::rand::{draw_line, LineCfg, ReplayToken};
use super::*;
use nalgebra::Vector2;

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn lines_cross_and_the_result_is_symmetric() {
    let cfg = GeomCfg::default();
    let a = Line::new(v(10.0, 10.0), v(0.0, 0.0));
    let b = Line::new(v(10.0, -10.0), v(0.0, 10.0));
    let p = intersect_lines(&a, Domain::Line, &b, Domain::Line, cfg).expect("crossing");
    assert!((p - v(5.0, 5.0)).norm() < 1e-9);
    let q = intersect_lines(&b, Domain::Line, &a, Domain::Line, cfg).expect("crossing");
    assert!((p - q).norm() < 1e-9);
}

#[test]
fn random_crossings_are_symmetric() {
    let cfg = GeomCfg::default();
    for i in 0..50 {
        let a = draw_line(LineCfg::default(), ReplayToken { seed: 9, index: 2 * i });
        let b = draw_line(LineCfg::default(), ReplayToken { seed: 9, index: 2 * i + 1 });
        let ab = intersect_lines(&a, Domain::Line, &b, Domain::Line, cfg);
        let ba = intersect_lines(&b, Domain::Line, &a, Domain::Line, cfg);
        match (ab, ba) {
            (Some(p), Some(q)) => assert!((p - q).norm() < 1e-6),
            (None, None) => {}
            _ => panic!("asymmetric outcome at index {i}"),
        }
    }
}

#[test]
fn parallel_and_degenerate_directions_never_intersect() {
    let cfg = GeomCfg::default();
    let a = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    let b = Line::new(v(2.0, 0.0), v(0.0, 5.0));
    assert!(intersect_lines(&a, Domain::Line, &b, Domain::Line, cfg).is_none());
    // Coincident support lines are also reported as no intersection.
    let c = Line::new(v(3.0, 0.0), v(1.0, 0.0));
    assert!(intersect_lines(&a, Domain::Line, &c, Domain::Line, cfg).is_none());
    let zero = Line::new(v(0.0, 0.0), v(1.0, 1.0));
    assert!(intersect_lines(&a, Domain::Line, &zero, Domain::Line, cfg).is_none());
}

#[test]
fn domain_predicates_gate_the_shared_solve() {
    let cfg = GeomCfg::default();
    // Crossing at a's segment endpoint (t0 = 1) and b's interior (t1 = 0.5).
    let a = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    let b = Line::new(v(0.0, 2.0), v(1.0, -1.0));
    let hit = |da, db| intersect_lines(&a, da, &b, db, cfg).is_some();
    assert!(hit(Domain::Line, Domain::Line));
    assert!(hit(Domain::SegmentIncl, Domain::SegmentIncl));
    assert!(hit(Domain::SegmentIncl, Domain::SegmentExcl));
    assert!(!hit(Domain::SegmentExcl, Domain::SegmentIncl));
    assert!(hit(Domain::RayIncl, Domain::RayExcl));

    // Crossing exactly at b2's ray origin (t1 = 0).
    let b2 = Line::new(v(0.0, 1.0), v(0.5, 0.0));
    assert!(hit2(&a, Domain::Line, &b2, Domain::RayIncl, cfg));
    assert!(!hit2(&a, Domain::Line, &b2, Domain::RayExcl, cfg));
    // Behind b3's ray origin (t1 < 0).
    let b3 = Line::new(v(0.0, 1.0), v(0.5, 1.0));
    assert!(!hit2(&a, Domain::Line, &b3, Domain::RayIncl, cfg));
    assert!(hit2(&a, Domain::Line, &b3, Domain::Line, cfg));
}

fn hit2(a: &Line, da: Domain, b: &Line, db: Domain, cfg: GeomCfg) -> bool {
    intersect_lines(a, da, b, db, cfg).is_some()
}

#[test]
fn parameter_tolerance_is_spatial() {
    let cfg = GeomCfg::default();
    // A long direction vector: eps on the parameter must shrink by 1/|v|
    // so that the acceptance band stays eps in space.
    let a = Line::new(v(1000.0, 0.0), v(0.0, 0.0));
    let just_inside = Line::new(v(0.0, 2.0), v(1000.0 + 1e-7, -1.0));
    let just_outside = Line::new(v(0.0, 2.0), v(1000.0 + 1e-5, -1.0));
    assert!(
        intersect_lines(&a, Domain::SegmentIncl, &just_inside, Domain::SegmentIncl, cfg).is_some()
    );
    assert!(
        intersect_lines(&a, Domain::SegmentIncl, &just_outside, Domain::SegmentIncl, cfg).is_none()
    );
}

#[test]
fn circle_line_secant_tangent_and_miss() {
    let cfg = GeomCfg::default();
    let circle = Circle::new(1.0, v(0.0, 0.0));
    let secant = Line::new(v(1.0, 0.0), v(-2.0, 0.0));
    let points = intersect_circle_line(&circle, &secant, Domain::Line, cfg);
    assert_eq!(points.len(), 2);
    assert!((points[0] - v(-1.0, 0.0)).norm() < 1e-9);
    assert!((points[1] - v(1.0, 0.0)).norm() < 1e-9);

    let tangent = Line::new(v(1.0, 0.0), v(-2.0, 1.0));
    let touch = intersect_circle_line(&circle, &tangent, Domain::Line, cfg);
    assert_eq!(touch.len(), 1);
    assert!(((touch[0] - circle.origin).norm() - circle.radius).abs() < 1e-9);

    let miss = Line::new(v(1.0, 0.0), v(-2.0, 1.5));
    assert!(intersect_circle_line(&circle, &miss, Domain::Line, cfg).is_empty());
}

#[test]
fn circle_line_candidates_respect_the_domain() {
    let cfg = GeomCfg::default();
    let circle = Circle::new(1.0, v(0.0, 0.0));
    // Ray starting inside the circle: only the forward crossing survives.
    let ray = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    let points = intersect_circle_line(&circle, &ray, Domain::RayExcl, cfg);
    assert_eq!(points.len(), 1);
    assert!((points[0] - v(1.0, 0.0)).norm() < 1e-9);
    // Segment that stops short of the circle: nothing survives.
    let short = Line::new(v(0.5, 0.0), v(-2.0, 0.0));
    assert!(intersect_circle_line(&circle, &short, Domain::SegmentIncl, cfg).is_empty());
}

#[test]
fn zero_radius_circle_degenerates_to_a_point() {
    let cfg = GeomCfg::default();
    let circle = Circle::new(0.0, v(2.0, 0.0));
    let through = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    let points = intersect_circle_line(&circle, &through, Domain::Line, cfg);
    assert_eq!(points.len(), 1);
    assert!((points[0] - v(2.0, 0.0)).norm() < 1e-9);
    let offset = Line::new(v(1.0, 0.0), v(0.0, 1.0));
    assert!(intersect_circle_line(&circle, &offset, Domain::Line, cfg).is_empty());
}

#[test]
fn circle_circle_cases() {
    let cfg = GeomCfg::default();
    let unit = Circle::new(1.0, v(0.0, 0.0));
    let crossing = Circle::new(1.0, v(1.0, 0.0));
    let points = intersect_circles(&unit, &crossing, cfg);
    assert_eq!(points.len(), 2);
    for p in &points {
        assert!(((p - unit.origin).norm() - 1.0).abs() < 1e-9);
        assert!(((p - crossing.origin).norm() - 1.0).abs() < 1e-9);
    }

    let tangent = Circle::new(1.0, v(2.0, 0.0));
    let touch = intersect_circles(&unit, &tangent, cfg);
    assert_eq!(touch.len(), 1);
    assert!((touch[0] - v(1.0, 0.0)).norm() < 1e-9);

    assert!(intersect_circles(&unit, &Circle::new(0.5, v(0.0, 0.0)), cfg).is_empty());
    assert!(intersect_circles(&unit, &Circle::new(1.0, v(5.0, 0.0)), cfg).is_empty());
    assert!(intersect_circles(&unit, &Circle::new(0.1, v(0.2, 0.0)), cfg).is_empty());
}

#[test]
fn bisectors_of_crossing_lines() {
    let cfg = GeomCfg::default();
    let a = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    let b = Line::new(v(0.0, 1.0), v(0.0, 0.0));
    let folds = bisect_lines(&a, &b, cfg);
    assert_eq!(folds.len(), 2);
    let d0 = folds[0].vector;
    assert!((d0 - v(0.5_f64.sqrt(), 0.5_f64.sqrt())).norm() < 1e-9);
    assert!(folds[0].vector.dot(&folds[1].vector).abs() < 1e-9);
    for fold in &folds {
        assert!((fold.origin - v(0.0, 0.0)).norm() < 1e-9);
    }
}

#[test]
fn bisector_of_parallel_lines_is_the_midline() {
    let cfg = GeomCfg::default();
    let a = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    let b = Line::new(v(3.0, 0.0), v(4.0, 2.0));
    let folds = bisect_lines(&a, &b, cfg);
    assert_eq!(folds.len(), 1);
    assert!(cross(folds[0].vector, a.vector).abs() < 1e-9);
    let u = folds[0].to_unique();
    assert!((u.normal.dot(&v(2.0, 1.0)) - u.distance).abs() < 1e-9);
}

#[test]
fn near_antiparallel_directions_use_the_stable_bisector() {
    let cfg = GeomCfg::default();
    // Within the window where the parallel gate does not fire but the
    // summed-direction formula would cancel catastrophically.
    let a = Line::new(v(1.0, 1e-4), v(0.0, 0.0));
    let b = Line::new(v(-1.0, 1e-4), v(0.0, 0.0));
    let folds = bisect_lines(&a, &b, cfg);
    assert_eq!(folds.len(), 2);
    let vertical = folds[0].vector;
    assert!(vertical.y.abs() > 0.999, "expected near-vertical bisector");
}

#[test]
fn nearest_point_clamps_per_domain() {
    let cfg = GeomCfg::default();
    let l = Line::new(v(2.0, 0.0), v(0.0, 0.0));
    let p = v(3.0, 1.0);
    assert!((nearest_point(p, &l, Domain::Line, cfg) - v(3.0, 0.0)).norm() < 1e-9);
    assert!((nearest_point(p, &l, Domain::SegmentIncl, cfg) - v(2.0, 0.0)).norm() < 1e-9);
    let behind = v(-1.0, 1.0);
    assert!((nearest_point(behind, &l, Domain::RayIncl, cfg) - v(0.0, 0.0)).norm() < 1e-9);
    assert!((nearest_point(behind, &l, Domain::Line, cfg) - v(-1.0, 0.0)).norm() < 1e-9);
}

#[test]
fn point_membership_follows_the_domain() {
    let cfg = GeomCfg::default();
    let l = Line::new(v(2.0, 0.0), v(0.0, 0.0));
    assert!(point_on_line(v(1.0, 0.0), &l, Domain::SegmentIncl, cfg));
    assert!(point_on_line(v(3.0, 0.0), &l, Domain::Line, cfg));
    assert!(!point_on_line(v(3.0, 0.0), &l, Domain::SegmentIncl, cfg));
    assert!(!point_on_line(v(-0.5, 0.0), &l, Domain::RayIncl, cfg));
    assert!(!point_on_line(v(1.0, 0.1), &l, Domain::Line, cfg));
}

#[test]
fn unique_line_round_trip_preserves_the_line() {
    let cfg = GeomCfg::default();
    for i in 0..20 {
        let l = draw_line(LineCfg::default(), ReplayToken { seed: 77, index: i });
        let back = l.to_unique().to_line();
        assert!(
            back.to_unique().is_equivalent(&l.to_unique(), cfg.eps),
            "round trip drifted at index {i}"
        );
        // The original origin still lies on the reconstructed line.
        let u = back.to_unique();
        assert!((u.normal.dot(&l.origin) - u.distance).abs() < cfg.eps);
    }
}

#[test]
fn unique_lines_match_under_direction_flip() {
    let l = Line::new(v(1.0, 2.0), v(0.5, -0.5));
    let flipped = Line::new(v(-1.0, -2.0), v(0.5, -0.5));
    assert!(l
        .to_unique()
        .is_equivalent(&flipped.to_unique(), 1e-9));
    let other = Line::new(v(1.0, 2.0), v(0.5, 0.5));
    assert!(!l.to_unique().is_equivalent(&other.to_unique(), 1e-9));
}

#[test]
fn reflection_across_the_diagonal_swaps_coordinates() {
    let diagonal = Line::new(v(1.0, 1.0), v(0.0, 0.0));
    let p = diagonal.reflect(v(3.0, 1.0));
    assert!((p - v(1.0, 3.0)).norm() < 1e-9);
    // Points on the line are fixed.
    let fixed = diagonal.reflect(v(2.0, 2.0));
    assert!((fixed - v(2.0, 2.0)).norm() < 1e-9);
}
