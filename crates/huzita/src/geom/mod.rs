//! Epsilon-tolerant 2D primitives and the generalized intersection algebra.
//!
//! Purpose
//! - One parametric intersection routine serves all nine line/ray/segment
//!   pairings by substituting [`Domain`] predicates; circle intersections
//!   reuse the same acceptance test on their chord parameters.
//! - Tolerances live in [`GeomCfg`] and are passed per call; parameter
//!   tolerances are rescaled by `1/|vector|` so eps measures a spatial
//!   distance, not a fraction of the parametric range.
//!
//! Code cross-refs: `types::{GeomCfg, Line, UniqueLine, Circle}`,
//! `domain::Domain`, `intersect`, `bisect`, and `roots` at the crate root.

pub mod rand;

mod bisect;
mod domain;
mod intersect;
mod types;
mod util;

pub use bisect::bisect_lines;
pub use domain::Domain;
pub use intersect::{
    intersect_circle_line, intersect_circles, intersect_lines, nearest_point, point_on_line,
};
pub use types::{Circle, GeomCfg, Line, UniqueLine};
pub use util::{cross, midpoint, rotate270, rotate90};

#[cfg(test)]
mod tests;
