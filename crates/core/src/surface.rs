//! Surface module - torus parameterization, rotation and shading
//!
//! Every function here is closed-form arithmetic over one `(θ, φ)` sample.
//! Sines and cosines are passed in precomputed so the frame loop can hoist
//! them out of the inner loops.

use std::f64::consts::TAU;

use crate::types::{Angles, TorusConfig, LUMINANCE_SCALE};

/// Cosine and sine of one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trig {
    pub cos: f64,
    pub sin: f64,
}

impl Trig {
    #[inline(always)]
    pub fn of(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }
}

/// Trig values of both whole-torus rotations, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTrig {
    pub a: Trig,
    pub b: Trig,
}

impl RotationTrig {
    pub fn new(angles: Angles) -> Self {
        Self {
            a: Trig::of(angles.a),
            b: Trig::of(angles.b),
        }
    }
}

/// One rotated surface point with its reciprocal depth and luminance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// 1/z; larger is nearer.
    pub ooz: f64,
    /// Dot product of the surface normal with the light direction, in [-√2, √2].
    pub luminance: f64,
}

impl SurfaceSample {
    /// Screen column and row of this point, floored.
    ///
    /// Rows grow downward, so y is negated. The result may fall outside the
    /// grid; callers skip such points.
    #[inline(always)]
    pub fn project(&self, config: &TorusConfig, k1: f64) -> (i64, i64) {
        let xp = (config.width as f64 / 2.0 + k1 * self.ooz * self.x).floor();
        let yp = (config.height as f64 / 2.0 - k1 * self.ooz * self.y).floor();
        (xp as i64, yp as i64)
    }
}

/// Compute the rotated point at `(θ, φ)`.
///
/// Precondition: `config.min_depth() > 0`, so z never reaches zero and `ooz`
/// stays finite and positive.
#[inline(always)]
pub fn sample_surface(
    config: &TorusConfig,
    rot: &RotationTrig,
    theta: Trig,
    phi: Trig,
) -> SurfaceSample {
    let (cos_a, sin_a) = (rot.a.cos, rot.a.sin);
    let (cos_b, sin_b) = (rot.b.cos, rot.b.sin);

    // The cross-section circle before revolving around the axis.
    let circle_x = config.revolution_radius + config.tube_radius * theta.cos;
    let circle_y = config.tube_radius * theta.sin;

    let x = circle_x * (cos_b * phi.cos + sin_a * sin_b * phi.sin) - circle_y * cos_a * sin_b;
    let y = circle_x * (sin_b * phi.cos - sin_a * cos_b * phi.sin) + circle_y * cos_a * cos_b;
    let z = config.viewer_distance + cos_a * circle_x * phi.sin + circle_y * sin_a;

    let luminance = phi.cos * theta.cos * sin_b
        - cos_a * theta.cos * phi.sin
        - sin_a * theta.sin
        + cos_b * (cos_a * theta.sin - theta.cos * sin_a * phi.sin);

    SurfaceSample {
        x,
        y,
        z,
        ooz: 1.0 / z,
        luminance,
    }
}

/// Ramp index for a luminance value, or `None` when the surface is unlit.
///
/// `L <= 0` faces away from (or edge-on to) the light. Lit values map to
/// `floor(L * 8)`, clamped to the last ramp entry.
#[inline(always)]
pub fn luminance_index(luminance: f64, ramp_len: usize) -> Option<usize> {
    if !(luminance > 0.0) || ramp_len == 0 {
        return None;
    }
    let idx = (luminance * LUMINANCE_SCALE).floor() as usize;
    Some(idx.min(ramp_len - 1))
}

/// Angles `0, s, 2s, ...` strictly below 2π.
///
/// Each value is computed as `i * spacing`, so long sweeps do not accumulate
/// rounding drift. A non-positive spacing yields nothing.
pub fn angle_steps(spacing: f64) -> impl Iterator<Item = f64> {
    // Saturates for tiny spacings instead of overflowing the counter.
    let count = if spacing > 0.0 {
        (TAU / spacing).ceil() as usize
    } else {
        0
    };
    (0..count)
        .map(move |i| i as f64 * spacing)
        .take_while(|&angle| angle < TAU)
}
