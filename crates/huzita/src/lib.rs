//! Epsilon-tolerant 2D geometry kernel and the seven Huzita–Justin
//! fold-axiom constructions.
//!
//! Layering (leaves first)
//! - `geom`: vector helpers, parameter-domain predicates, the generalized
//!   line/ray/segment and circle intersection kernel, angle bisectors, and
//!   the unit-normal/signed-distance line form.
//! - `roots`: degree-adaptive real-root solver for cubics (pure numeric).
//! - `axioms`: the seven constructive fold operations, built on both.
//!
//! Everything is a pure function over `Copy` values; "no solution" is an
//! `Option` or an empty `Vec`, never an error. Tolerances live in
//! [`GeomCfg`] and are passed explicitly per call.

pub mod axioms;
pub mod geom;
pub mod roots;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Circle, Domain, GeomCfg, Line, UniqueLine};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::axioms::{axiom1, axiom2, axiom3, axiom4, axiom5, axiom6, axiom7};
    pub use crate::geom::rand::{draw_line, draw_point, LineCfg, ReplayToken};
    pub use crate::geom::{
        bisect_lines, intersect_circle_line, intersect_circles, intersect_lines, nearest_point,
        point_on_line, Circle, Domain, GeomCfg, Line, UniqueLine,
    };
    pub use crate::roots::solve_polynomial;
    pub use nalgebra::Vector2 as Vec2;
}
