//! Fold constructions on a unit square of paper.
//!
//! Purpose
//! - Exercise each axiom once on concrete coordinates and print the
//!   resulting fold lines as vector/origin pairs, as a quick smoke probe
//!   for the whole stack (kernel, bisectors, cubic solver).

use huzita::prelude::*;

fn report(name: &str, folds: &[Line]) {
    println!("{name} solutions={}", folds.len());
    for fold in folds {
        println!(
            "  vector=({:.6}, {:.6}) origin=({:.6}, {:.6})",
            fold.vector.x, fold.vector.y, fold.origin.x, fold.origin.y
        );
    }
}

fn main() {
    let cfg = GeomCfg::default();
    // Square corners and edges.
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(1.0, 0.0);
    let c = Vec2::new(1.0, 1.0);
    let d = Vec2::new(0.0, 1.0);
    let bottom = Line::new(Vec2::new(1.0, 0.0), a);
    let left = Line::new(Vec2::new(0.0, 1.0), a);
    let top = Line::new(Vec2::new(1.0, 0.0), d);

    report("axiom1(diagonal)", &[axiom1(a, c)]);
    report("axiom2(book fold)", &[axiom2(a, b)]);
    report("axiom3(corner bisectors)", &axiom3(&bottom, &left, cfg));
    report("axiom3(horizontal midline)", &axiom3(&bottom, &top, cfg));
    report("axiom4(perpendicular)", &[axiom4(c - a, b)]);
    report(
        "axiom5(corner onto bottom edge)",
        &axiom5(&bottom, d, Vec2::new(0.5, 0.5), cfg),
    );
    report(
        "axiom6(two corners onto two edges)",
        &axiom6(&bottom, &left, c, d, cfg),
    );
    match axiom7(&left, &bottom, c, cfg) {
        Some(fold) => report("axiom7(perpendicular carry)", &[fold]),
        None => println!("axiom7(perpendicular carry) solutions=0"),
    }
}
