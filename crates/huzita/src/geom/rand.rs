//! Deterministic random points and lines (replay tokens).
//!
//! Purpose
//! - Reproducible, indexable draws of non-degenerate test and bench inputs.
//!   Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so a draw can be replayed from its token alone.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Line;

/// Sampler configuration for random lines.
#[derive(Clone, Copy, Debug)]
pub struct LineCfg {
    /// Origins are drawn uniformly from `[-span, span]²`.
    pub span: f64,
    /// Direction magnitude drawn from `[mag_min, mag_max]`; keep `mag_min`
    /// well above zero so draws are never degenerate.
    pub mag_min: f64,
    pub mag_max: f64,
}

impl Default for LineCfg {
    fn default() -> Self {
        Self {
            span: 2.0,
            mag_min: 0.1,
            mag_max: 3.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point in `[-span, span]²`.
pub fn draw_point(span: f64, tok: ReplayToken) -> Vector2<f64> {
    let mut rng = tok.to_std_rng();
    point_in(&mut rng, span)
}

/// Draw a non-degenerate line: random origin, random direction angle, and
/// a magnitude bounded away from zero.
pub fn draw_line(cfg: LineCfg, tok: ReplayToken) -> Line {
    let mut rng = tok.to_std_rng();
    let origin = point_in(&mut rng, cfg.span);
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let lo = cfg.mag_min.max(1e-9);
    let hi = cfg.mag_max.max(lo + 1e-9);
    let mag = rng.gen_range(lo..=hi);
    Line::new(Vector2::new(theta.cos(), theta.sin()) * mag, origin)
}

fn point_in<R: Rng>(rng: &mut R, span: f64) -> Vector2<f64> {
    Vector2::new(
        (rng.gen::<f64>() * 2.0 - 1.0) * span,
        (rng.gen::<f64>() * 2.0 - 1.0) * span,
    )
}
