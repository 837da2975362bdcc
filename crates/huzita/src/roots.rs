//! Degree-adaptive real-root solver for `a·x³ + b·x² + c·x + d = 0`.
//!
//! The effective degree is the highest whose coefficient magnitude exceeds
//! eps, so numerical noise in a leading term cannot push the solve down an
//! unstable formula. Three distinct real roots go through the trigonometric
//! branch, which avoids complex intermediates. Pure numeric leaf: no
//! geometry imports.

/// Real roots of the effective-degree polynomial, in the branch's natural
/// order. Constant (or all-noise) input yields no roots.
pub fn solve_polynomial(a: f64, b: f64, c: f64, d: f64, eps: f64) -> Vec<f64> {
    if a.abs() > eps {
        solve_cubic(b / a, c / a, d / a, eps)
    } else if b.abs() > eps {
        solve_quadratic(b, c, d, eps)
    } else if c.abs() > eps {
        vec![-d / c]
    } else {
        Vec::new()
    }
}

/// `b·x² + c·x + d` with `|b| > eps`.
fn solve_quadratic(b: f64, c: f64, d: f64, eps: f64) -> Vec<f64> {
    let discriminant = c * c - 4.0 * b * d;
    if discriminant < -eps {
        return Vec::new();
    }
    let center = -c / (2.0 * b);
    if discriminant.abs() < eps {
        return vec![center];
    }
    let spread = discriminant.sqrt() / (2.0 * b);
    vec![center + spread, center - spread]
}

/// Monic cubic `x³ + a2·x² + a1·x + a0` via Cardano.
fn solve_cubic(a2: f64, a1: f64, a0: f64, eps: f64) -> Vec<f64> {
    let q = (3.0 * a1 - a2 * a2) / 9.0;
    let r = (9.0 * a2 * a1 - 27.0 * a0 - 2.0 * a2 * a2 * a2) / 54.0;
    let disc = q * q * q + r * r;
    let shift = -a2 / 3.0;
    if disc.abs() < eps {
        // Repeated root. Built from the real cube root of r, which does not
        // exist in this branch's formula when r < 0.
        if r < 0.0 {
            return Vec::new();
        }
        let s = r.cbrt();
        return vec![shift + 2.0 * s, shift - s];
    }
    if disc > 0.0 {
        // One real root: sum of the two real cube roots.
        let sd = disc.sqrt();
        return vec![shift + (r + sd).cbrt() + (r - sd).cbrt()];
    }
    // Three distinct real roots: trigonometric branch.
    let rho = (r * r - disc).powf(1.0 / 6.0);
    let phi = (-disc).sqrt().atan2(r) / 3.0;
    let re = rho * phi.cos();
    let im = rho * phi.sin();
    vec![
        shift + 2.0 * re,
        shift - re - 3.0_f64.sqrt() * im,
        shift - re + 3.0_f64.sqrt() * im,
    ]
}
